//! Types for reading the plaintext assembly manifest
//!

use indexmap::IndexMap;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use crate::error::{Error, Result};

/// One row of the assembly manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// 32-bit name hash, as spelled in the manifest
    pub hash32: String,

    /// 64-bit name hash, as spelled in the manifest
    pub hash64: String,

    /// Identifier of the store holding the entry
    pub blob_id: u32,

    /// Position of the entry within that store's index
    pub blob_idx: u32,

    /// Logical assembly name, without extension
    pub name: String,
}

/// In-memory manifest table, keyed by the (store, index) identity of each entry
///
/// ```no_run
/// fn print_names(reader: impl std::io::Read) -> xaba_store::error::Result<()> {
///     let manifest = xaba_store::Manifest::from_reader(reader)?;
///
///     for entry in manifest.entries() {
///         println!("{} -> {}", entry.blob_idx, entry.name);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Default)]
pub struct Manifest {
    entries: IndexMap<(u32, u32), ManifestEntry>,
}

impl Manifest {
    /// Read a manifest file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Manifest> {
        Self::from_reader(File::open(path)?)
    }

    /// Parse a manifest from its plaintext form.
    ///
    /// Rows are whitespace-delimited `hash32 hash64 blobId blobIdx name` columns. Blank lines
    /// and the `Hash ...` column header are skipped. When two rows claim the same identity the
    /// first one wins.
    pub fn from_reader(reader: impl Read) -> Result<Manifest> {
        let mut entries = IndexMap::new();

        for (number, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() || line.starts_with("Hash") {
                continue;
            }

            let entry = Self::parse_row(&line).ok_or(Error::MalformedManifestRow {
                line: number + 1,
            })?;
            entries
                .entry((entry.blob_id, entry.blob_idx))
                .or_insert(entry);
        }

        Ok(Manifest { entries })
    }

    fn parse_row(line: &str) -> Option<ManifestEntry> {
        let mut columns = line.split_whitespace();

        Some(ManifestEntry {
            hash32: columns.next()?.to_owned(),
            hash64: columns.next()?.to_owned(),
            blob_id: columns.next()?.parse().ok()?,
            blob_idx: columns.next()?.parse().ok()?,
            name: columns.next()?.to_owned(),
        })
    }

    /// Number of entries in the manifest.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the entries in manifest order.
    pub fn entries(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.values()
    }

    /// Look up the entry at `index` of the store identified by `store_id`, if present.
    pub fn get(&self, store_id: u32, index: u32) -> Option<&ManifestEntry> {
        self.entries.get(&(store_id, index))
    }

    /// Look up the entry at `index` of the store identified by `store_id`.
    ///
    /// Extraction cannot name an entry without its manifest row, so a miss is
    /// [`Error::MissingManifestEntry`].
    pub fn resolve(&self, store_id: u32, index: u32) -> Result<&ManifestEntry> {
        self.get(store_id, index).ok_or(Error::MissingManifestEntry {
            store_id,
            index,
        })
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::error::{Error, Result};
    use crate::manifest::Manifest;

    const SAMPLE: &str = "\
Hash 32     Hash 64             Blob ID  Blob idx  Name

0x9b9f5b69  0x458d16ba6df1e2b5  000      0000      Java.Interop
0x34c27f27  0xbf1df1e7a1363d95  000      0001      Mono.Android

0x0ad9ab02  0xa46cd4f6ed8cd4f3  001      0000      App.Shared
";

    #[test]
    fn parse_skips_header_and_blank_lines() -> Result<()> {
        let manifest = Manifest::from_reader(SAMPLE.as_bytes())?;

        assert_eq!(manifest.len(), 3);
        assert_eq!(
            manifest.entries().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["Java.Interop", "Mono.Android", "App.Shared"]
        );

        Ok(())
    }

    #[test]
    fn resolve_by_store_and_index() -> Result<()> {
        let manifest = Manifest::from_reader(SAMPLE.as_bytes())?;

        let entry = manifest.resolve(0, 1)?;
        assert_eq!(entry.name, "Mono.Android");
        assert_eq!(entry.hash32, "0x34c27f27");
        assert_eq!(entry.hash64, "0xbf1df1e7a1363d95");

        let entry = manifest.resolve(1, 0)?;
        assert_eq!(entry.name, "App.Shared");

        Ok(())
    }

    #[test]
    fn resolve_misses_are_fatal() -> Result<()> {
        let manifest = Manifest::from_reader(SAMPLE.as_bytes())?;

        match manifest.resolve(0, 2) {
            Err(Error::MissingManifestEntry { store_id, index }) => {
                assert_eq!(store_id, 0);
                assert_eq!(index, 2);
            }
            other => panic!("expected a missing entry, got {other:?}"),
        }

        match manifest.resolve(7, 0) {
            Err(Error::MissingManifestEntry { store_id, .. }) => assert_eq!(store_id, 7),
            other => panic!("expected a missing entry, got {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn malformed_row_reports_its_line() {
        let text = "0x9b9f5b69  0x458d16ba6df1e2b5  000\n";

        match Manifest::from_reader(text.as_bytes()) {
            Err(Error::MalformedManifestRow { line }) => assert_eq!(line, 1),
            other => panic!("expected a malformed row, got {other:?}"),
        }
    }

    #[test]
    fn first_of_duplicate_identities_wins() -> Result<()> {
        let text = "\
0x11111111  0x1111111111111111  000  0000  First
0x22222222  0x2222222222222222  000  0000  Second
";
        let manifest = Manifest::from_reader(text.as_bytes())?;

        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.resolve(0, 0)?.name, "First");

        Ok(())
    }
}
