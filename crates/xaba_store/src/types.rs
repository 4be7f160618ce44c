//! Base types for the structure of an assembly store file.

use binrw::BinRead;

/// Signature at the start of every assembly store file
pub const STORE_MAGIC: [u8; 4] = *b"XABA";

/// Highest store format version this reader understands
pub const FORMAT_VERSION: u32 = 1;

/// Signature at the start of a block-compressed entry payload
pub const COMPRESSED_DATA_MAGIC: [u8; 4] = *b"XALZ";

/// Assembly store header
///
/// The first 20 bytes of every store file. All data is stored in little endian format.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct StoreHeader {
    /// Format version of the file, at most [`FORMAT_VERSION`]
    pub version: u32,

    /// The number of index records physically present in this file
    pub local_entry_count: u32,

    /// The number of entries across all stores of the package
    ///
    /// When this exceeds [`StoreHeader::local_entry_count`] the remaining entries live in
    /// architecture-specific stores.
    pub global_entry_count: u32,

    /// Identifier of this store, half of the manifest identity key
    pub store_id: u32,
}

/// Index record describing one packed assembly
///
/// Offsets and sizes are byte positions into the raw store file. They are not validated until
/// the entry is sliced.
#[derive(BinRead, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[br(little)]
pub struct EntryDescriptor {
    /// Offset of the assembly image
    pub data_offset: u32,

    /// Size of the assembly image
    pub data_size: u32,

    /// Offset of the debug sub-blob, 0 if absent
    pub debug_data_offset: u32,

    /// Size of the debug sub-blob
    pub debug_data_size: u32,

    /// Offset of the config sub-blob, 0 if absent
    pub config_data_offset: u32,

    /// Size of the config sub-blob
    pub config_data_size: u32,
}

/// Record of the 32-bit keyed global hash table
#[derive(BinRead, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[br(little)]
pub struct HashEntry32 {
    /// 32-bit name hash of the entry
    pub hash: u32,

    /// Position in the mapping table
    pub mapping_index: u32,

    /// Index within the owning store
    pub local_store_index: u32,

    /// Identifier of the owning store
    pub store_id: u32,
}

impl HashEntry32 {
    /// Render the hash the way the manifest spells it, zero-padded uppercase hex.
    pub fn hash_display(&self) -> String {
        format!("0x{:08X}", self.hash)
    }
}

/// Record of the 64-bit keyed global hash table
#[derive(BinRead, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[br(little)]
pub struct HashEntry64 {
    /// 64-bit name hash of the entry
    pub hash: u64,

    /// Position in the mapping table
    pub mapping_index: u32,

    /// Index within the owning store
    pub local_store_index: u32,

    /// Identifier of the owning store
    pub store_id: u32,
}

impl HashEntry64 {
    /// Render the hash the way the manifest spells it, zero-padded uppercase hex.
    pub fn hash_display(&self) -> String {
        format!("0x{:016X}", self.hash)
    }
}
