//! Extraction of packed assemblies into individual files
//!

use std::{fs, path::Path};

use tracing::info;

use crate::compression;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::read::AssemblyStore;

/// Parsed header fields of one store, as reported in the extraction summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HeaderSummary {
    /// Format version of the store
    pub version: u32,

    /// Local entry count
    pub lec: u32,

    /// Global entry count
    pub gec: u32,

    /// Identifier of the store
    pub store_id: u32,
}

/// Metadata record for one extracted assembly
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExtractedAssembly {
    /// Logical assembly name from the manifest
    pub name: String,

    /// Identifier of the store the entry came from
    pub store_id: u32,

    /// Position of the entry within that store's index
    pub blob_idx: u32,

    /// 32-bit name hash from the manifest
    pub hash32: String,

    /// 64-bit name hash from the manifest
    pub hash64: String,

    /// Path the assembly was written to
    pub file: String,

    /// Whether the payload was block-compressed in the store
    pub lz4: bool,

    /// Descriptor index from the compression frame, for compressed payloads only
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub lz4_desc_idx: Option<u32>,
}

impl AssemblyStore {
    /// The store's header fields in summary form.
    pub fn header_summary(&self) -> HeaderSummary {
        HeaderSummary {
            version: self.header().version,
            lec: self.header().local_entry_count,
            gec: self.header().global_entry_count,
            store_id: self.header().store_id,
        }
    }

    /// Extract every entry of this store into `out_dir`, one `{name}.dll` per entry.
    ///
    /// Entries are processed in index order and each is resolved against the manifest by
    /// `(store_id, index)`. The first failing entry aborts the whole extraction; there is no
    /// continue-on-error mode. The output directory is created if absent, and files already
    /// present there are overwritten.
    ///
    /// Returns the metadata records in index order.
    pub fn extract_all(
        &self,
        manifest: &Manifest,
        out_dir: impl AsRef<Path>,
    ) -> Result<Vec<ExtractedAssembly>> {
        let out_dir = out_dir.as_ref();
        fs::create_dir_all(out_dir)?;

        let mut extracted = Vec::with_capacity(self.len());
        for index in 0..self.len() {
            let entry = manifest.resolve(self.store_id(), index as u32)?;
            let data = self.entry_data(index)?;

            let path = out_dir.join(format!("{}.dll", entry.name));
            info!("writing {}", path.display());

            let (lz4, lz4_desc_idx) = if compression::is_compressed(data) {
                let block = compression::decompress(data)?;
                fs::write(&path, &block.data)?;
                (true, Some(block.descriptor_index))
            } else {
                fs::write(&path, data)?;
                (false, None)
            };

            extracted.push(ExtractedAssembly {
                name: entry.name.clone(),
                store_id: entry.blob_id,
                blob_idx: entry.blob_idx,
                hash32: entry.hash32.clone(),
                hash64: entry.hash64.clone(),
                file: path.display().to_string(),
                lz4,
                lz4_desc_idx,
            });
        }

        Ok(extracted)
    }
}
