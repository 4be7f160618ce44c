//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent wrapper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    /// Transparent wrapper for [`lz4_flex::block::DecompressError`]
    #[error(transparent)]
    Lz4Error(#[from] lz4_flex::block::DecompressError),

    /// The file does not start with the store signature
    #[error("invalid store magic: expected {expected:02X?}, found {found:02X?}")]
    InvalidMagic {
        /// The fixed store signature
        expected: [u8; 4],
        /// The four bytes actually read
        found: [u8; 4],
    },

    /// The store was produced by a newer toolchain than this reader understands
    #[error("unsupported store format version: max supported is {max}, found {found}")]
    UnsupportedVersion {
        /// The version read from the header
        found: u32,
        /// The highest version this reader accepts
        max: u32,
    },

    /// No index record exists at the requested position
    #[error("no entry at index {0}")]
    EntryNotFound(usize),

    /// An index record points past the end of the store file
    #[error("entry {index} spans bytes {offset}..{offset}+{size}, past the end of the {len} byte store")]
    TruncatedEntry {
        /// Position of the offending index record
        index: usize,
        /// Declared data offset
        offset: u32,
        /// Declared data size
        size: u32,
        /// Actual length of the store file
        len: usize,
    },

    /// A compressed entry is too short to hold the frame header
    #[error("compressed frame is {len} bytes, shorter than its 12 byte header")]
    TruncatedFrame {
        /// Length of the entry payload
        len: usize,
    },

    /// Decoding a compressed entry produced a different amount of data than its header declared
    #[error("decompressed size mismatch: expected {expected} bytes, got {actual}")]
    DecompressionSizeMismatch {
        /// The uncompressed length declared by the frame header
        expected: usize,
        /// The number of bytes the decoder produced
        actual: usize,
    },

    /// The manifest has no row for the requested entry
    #[error("no manifest entry for store {store_id} index {index}")]
    MissingManifestEntry {
        /// Store identifier used for the lookup
        store_id: u32,
        /// Entry ordinal used for the lookup
        index: u32,
    },

    /// A manifest row could not be split into its five columns
    #[error("malformed manifest row at line {line}")]
    MalformedManifestRow {
        /// One-based line number in the manifest file
        line: usize,
    },

    /// The architecture token is not one of the four known ABIs
    #[error("unknown architecture {0:?}, expected one of arm, arm64, x86, x86_64")]
    UnknownArchitecture(String),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
