//! Types for reading assembly store files
//!

use binrw::BinRead;
use byteorder::{LittleEndian, ReadBytesExt};
use std::{
    io::{Cursor, Read},
    path::Path,
};

use crate::error::{Error, Result};
use crate::types::{
    EntryDescriptor, HashEntry32, HashEntry64, StoreHeader, FORMAT_VERSION, STORE_MAGIC,
};

/// Assembly store reader
///
/// The whole store file is captured into memory up front; parsing and entry slicing operate on
/// that buffer without further reads.
///
/// ```no_run
/// fn list_entries(path: &std::path::Path) -> xaba_store::error::Result<()> {
///     let store = xaba_store::AssemblyStore::open(path, true)?;
///
///     for index in 0..store.len() {
///         let data = store.entry_data(index)?;
///         println!("entry {index}: {} bytes", data.len());
///     }
///
///     Ok(())
/// }
/// ```
pub struct AssemblyStore {
    raw: Vec<u8>,
    primary: bool,
    header: StoreHeader,
    entries: Vec<EntryDescriptor>,
    hash32: Vec<HashEntry32>,
    hash64: Vec<HashEntry64>,
}

impl AssemblyStore {
    /// Read a store file from disk.
    ///
    /// The file handle is released as soon as the buffer is captured.
    pub fn open(path: impl AsRef<Path>, primary: bool) -> Result<AssemblyStore> {
        Self::parse(std::fs::read(path)?, primary)
    }

    /// Read a store from any byte source.
    ///
    /// `primary` selects whether the global hash tables follow the index; only the primary
    /// store of a package carries them.
    pub fn new(mut reader: impl Read, primary: bool) -> Result<AssemblyStore> {
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;
        Self::parse(raw, primary)
    }

    fn parse(raw: Vec<u8>, primary: bool) -> Result<AssemblyStore> {
        let mut cursor = Cursor::new(raw.as_slice());

        let mut magic = [0u8; 4];
        cursor.read_exact(&mut magic)?;
        if magic != STORE_MAGIC {
            return Err(Error::InvalidMagic {
                expected: STORE_MAGIC,
                found: magic,
            });
        }

        let version = cursor.read_u32::<LittleEndian>()?;
        if version > FORMAT_VERSION {
            return Err(Error::UnsupportedVersion {
                found: version,
                max: FORMAT_VERSION,
            });
        }

        let header = StoreHeader {
            version,
            local_entry_count: cursor.read_u32::<LittleEndian>()?,
            global_entry_count: cursor.read_u32::<LittleEndian>()?,
            store_id: cursor.read_u32::<LittleEndian>()?,
        };

        let entries = (0..header.local_entry_count)
            .map(|_| EntryDescriptor::read(&mut cursor).map_err(Error::from))
            .collect::<Result<Vec<_>>>()?;

        // Only the primary store carries the hash tables; reading them also keeps the cursor
        // aligned for anything stored past them.
        let (hash32, hash64) = if primary {
            (
                (0..header.local_entry_count)
                    .map(|_| HashEntry32::read(&mut cursor).map_err(Error::from))
                    .collect::<Result<Vec<_>>>()?,
                (0..header.local_entry_count)
                    .map(|_| HashEntry64::read(&mut cursor).map_err(Error::from))
                    .collect::<Result<Vec<_>>>()?,
            )
        } else {
            (Vec::new(), Vec::new())
        };

        Ok(AssemblyStore {
            raw,
            primary,
            header,
            entries,
            hash32,
            hash64,
        })
    }

    /// Number of entries contained in this store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this store contains no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether this store was read as the primary store of its package.
    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// The parsed store header.
    pub fn header(&self) -> &StoreHeader {
        &self.header
    }

    /// Identifier of this store.
    pub fn store_id(&self) -> u32 {
        self.header.store_id
    }

    /// Whether the package holds further entries in architecture-specific stores.
    pub fn has_external_entries(&self) -> bool {
        self.header.local_entry_count < self.header.global_entry_count
    }

    /// The index records, in file order.
    pub fn entries(&self) -> &[EntryDescriptor] {
        &self.entries
    }

    /// The 32-bit keyed global hash table. Empty for non-primary stores.
    pub fn hash32_entries(&self) -> &[HashEntry32] {
        &self.hash32
    }

    /// The 64-bit keyed global hash table. Empty for non-primary stores.
    pub fn hash64_entries(&self) -> &[HashEntry64] {
        &self.hash64
    }

    /// Slice the raw payload of the entry at `index`.
    ///
    /// Offsets are only validated here; an index record pointing past the end of the buffer is
    /// [`Error::TruncatedEntry`].
    pub fn entry_data(&self, index: usize) -> Result<&[u8]> {
        let entry = self.entries.get(index).ok_or(Error::EntryNotFound(index))?;

        let start = entry.data_offset as usize;
        let end = start + entry.data_size as usize;
        if end > self.raw.len() {
            return Err(Error::TruncatedEntry {
                index,
                offset: entry.data_offset,
                size: entry.data_size,
                len: self.raw.len(),
            });
        }

        Ok(&self.raw[start..end])
    }
}
