use clap::Args;
use miette::{miette, Context, IntoDiagnostic, Result};
use std::{fs, path::PathBuf};
use tracing::info;
use xaba_store::arch::{FILE_ASSEMBLIES_BLOB, FILE_ASSEMBLIES_JSON, FILE_ASSEMBLIES_MANIFEST};
use xaba_store::{Architecture, AssemblyStore, ExtractedAssembly, HeaderSummary, Manifest};

#[derive(Args)]
pub struct UnpackArgs {
    /// An input directory holding the blob package
    #[arg(short, long, value_name = "DIR")]
    input: PathBuf,

    /// Architecture store to unpack when the package is split per ABI (arm, arm64, x86, x86_64)
    #[arg(short, long, value_name = "ARCH")]
    arch: Option<String>,

    /// A target directory; defaults to `out` under the input directory
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Replace the target directory if it already exists
    #[arg(short, long, default_value_t = false)]
    force: bool,
}

impl UnpackArgs {
    pub fn handle(&self) -> Result<()> {
        let out_dir = self
            .output
            .clone()
            .unwrap_or_else(|| self.input.join("out"));

        if out_dir.exists() {
            if !self.force {
                return Err(miette!(
                    "output directory {} already exists, pass --force to replace it",
                    out_dir.display()
                ));
            }
            fs::remove_dir_all(&out_dir)
                .into_diagnostic()
                .context(format!("removing {}", out_dir.display()))?;
        }

        let manifest_path = self.input.join(FILE_ASSEMBLIES_MANIFEST);
        if !manifest_path.is_file() {
            return Err(miette!("manifest {} does not exist", manifest_path.display()));
        }

        let blob_path = self.input.join(FILE_ASSEMBLIES_BLOB);
        if !blob_path.is_file() {
            return Err(miette!("assembly store {} does not exist", blob_path.display()));
        }

        let manifest = Manifest::open(&manifest_path)?;
        let store = AssemblyStore::open(&blob_path, true)?;

        let mut stores = vec![(FILE_ASSEMBLIES_BLOB.to_owned(), store.header_summary())];
        let mut assemblies = store.extract_all(&manifest, &out_dir)?;

        if store.has_external_entries() {
            let arch = self
                .arch
                .as_deref()
                .ok_or_else(|| miette!("package is split per ABI, pass --arch to pick a store"))?;
            let arch: Architecture = arch.parse()?;

            let arch_path = self.input.join(arch.blob_file_name());
            if !arch_path.is_file() {
                return Err(miette!(
                    "assembly store {} does not exist",
                    arch_path.display()
                ));
            }

            let arch_store = AssemblyStore::open(&arch_path, false)?;
            stores.push((arch.blob_file_name().to_owned(), arch_store.header_summary()));
            assemblies.extend(arch_store.extract_all(&manifest, &out_dir)?);
        }

        let summary_path = out_dir.join(FILE_ASSEMBLIES_JSON);
        fs::write(&summary_path, summary_json(&stores, &assemblies)?)
            .into_diagnostic()
            .context(format!("writing {}", summary_path.display()))?;

        info!(
            "unpacked {} assemblies into {}",
            assemblies.len(),
            out_dir.display()
        );

        Ok(())
    }
}

fn summary_json(
    stores: &[(String, HeaderSummary)],
    assemblies: &[ExtractedAssembly],
) -> Result<String> {
    let stores = stores
        .iter()
        .map(|(file_name, header)| {
            let mut wrapper = serde_json::Map::new();
            wrapper.insert(file_name.clone(), serde_json::json!({ "header": header }));
            serde_json::Value::Object(wrapper)
        })
        .collect::<Vec<_>>();

    serde_json::to_string_pretty(&serde_json::json!({
        "stores": stores,
        "assemblies": assemblies,
    }))
    .into_diagnostic()
}
