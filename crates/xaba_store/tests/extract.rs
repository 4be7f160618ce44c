use std::fs;
use std::path::Path;

use lz4_flex::block::compress;
use tracing::info;
use tracing_test::traced_test;
use walkdir::WalkDir;
use xaba_store::arch::{Architecture, FILE_ASSEMBLIES_BLOB, FILE_ASSEMBLIES_MANIFEST};
use xaba_store::error::Result;
use xaba_store::{AssemblyStore, Manifest};

fn push_u32(data: &mut Vec<u8>, value: u32) {
    data.extend_from_slice(&value.to_le_bytes());
}

fn build_store(primary: bool, global_entry_count: u32, store_id: u32, payloads: &[Vec<u8>]) -> Vec<u8> {
    let local_entry_count = payloads.len() as u32;
    let mut data_base = 20 + local_entry_count * 24;
    if primary {
        data_base += local_entry_count * (16 + 20);
    }

    let mut data = b"XABA".to_vec();
    push_u32(&mut data, 1);
    push_u32(&mut data, local_entry_count);
    push_u32(&mut data, global_entry_count);
    push_u32(&mut data, store_id);

    let mut offset = data_base;
    for payload in payloads {
        push_u32(&mut data, offset);
        push_u32(&mut data, payload.len() as u32);
        data.extend_from_slice(&[0u8; 16]);
        offset += payload.len() as u32;
    }

    if primary {
        for index in 0..local_entry_count {
            push_u32(&mut data, 0x1000 + index);
            push_u32(&mut data, index);
            push_u32(&mut data, index);
            push_u32(&mut data, store_id);
        }
        for index in 0..local_entry_count {
            push_u32(&mut data, 0x2000 + index);
            push_u32(&mut data, 0);
            push_u32(&mut data, index);
            push_u32(&mut data, index);
            push_u32(&mut data, store_id);
        }
    }

    for payload in payloads {
        data.extend_from_slice(payload);
    }
    data
}

fn compressed_payload(descriptor_index: u32, image: &[u8]) -> Vec<u8> {
    let mut data = b"XALZ".to_vec();
    push_u32(&mut data, descriptor_index);
    push_u32(&mut data, image.len() as u32);
    data.extend_from_slice(&compress(image));
    data
}

/// Lay out a split package on disk: manifest, primary store, one arm64 store.
fn build_package(dir: &Path) -> Result<()> {
    let manifest = "\
Hash 32     Hash 64             Blob ID  Blob idx  Name
0x9b9f5b69  0x458d16ba6df1e2b5  000      0000      Java.Interop
0x34c27f27  0xbf1df1e7a1363d95  000      0001      Mono.Android
0x0ad9ab02  0xa46cd4f6ed8cd4f3  001      0000      App.Native
";
    fs::write(dir.join(FILE_ASSEMBLIES_MANIFEST), manifest)?;

    let primary = build_store(
        true,
        3,
        0,
        &[
            b"plain shared image".to_vec(),
            compressed_payload(4, b"an image worth packing with the block compressor"),
        ],
    );
    fs::write(dir.join(FILE_ASSEMBLIES_BLOB), primary)?;

    let arm64: Architecture = "arm64".parse()?;
    let secondary = build_store(false, 3, 1, &[b"aarch64 specific image".to_vec()]);
    fs::write(dir.join(arm64.blob_file_name()), secondary)?;

    Ok(())
}

#[traced_test]
#[test]
fn unpack_split_package() -> Result<()> {
    let package = tempfile::tempdir()?;
    let out = tempfile::tempdir()?;
    build_package(package.path())?;

    let manifest = Manifest::open(package.path().join(FILE_ASSEMBLIES_MANIFEST))?;
    let store = AssemblyStore::open(package.path().join(FILE_ASSEMBLIES_BLOB), true)?;

    info!("extracting primary store {}", store.store_id());
    assert!(store.has_external_entries());
    let mut extracted = store.extract_all(&manifest, out.path())?;

    let arm64: Architecture = "arm64".parse()?;
    let arch_store =
        AssemblyStore::open(package.path().join(arm64.blob_file_name()), false)?;

    info!("extracting secondary store {}", arch_store.store_id());
    extracted.extend(arch_store.extract_all(&manifest, out.path())?);

    assert_eq!(
        extracted.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
        vec!["Java.Interop", "Mono.Android", "App.Native"]
    );
    assert_eq!(
        extracted.iter().map(|a| (a.store_id, a.blob_idx)).collect::<Vec<_>>(),
        vec![(0, 0), (0, 1), (1, 0)]
    );
    assert_eq!(extracted[1].lz4_desc_idx, Some(4));

    let produced = WalkDir::new(out.path())
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| !e.file_type().is_dir())
        .count();
    assert_eq!(produced, 3);

    assert_eq!(
        fs::read(out.path().join("Java.Interop.dll"))?,
        b"plain shared image"
    );
    assert_eq!(
        fs::read(out.path().join("Mono.Android.dll"))?,
        b"an image worth packing with the block compressor"
    );
    assert_eq!(
        fs::read(out.path().join("App.Native.dll"))?,
        b"aarch64 specific image"
    );

    Ok(())
}

#[traced_test]
#[test]
fn both_stores_resolve_against_the_shared_manifest() -> Result<()> {
    let package = tempfile::tempdir()?;
    build_package(package.path())?;

    let manifest = Manifest::open(package.path().join(FILE_ASSEMBLIES_MANIFEST))?;

    // The secondary store is keyed by its own store id, not the primary's.
    assert_eq!(manifest.resolve(1, 0)?.name, "App.Native");
    assert!(manifest.resolve(1, 1).is_err());

    Ok(())
}
