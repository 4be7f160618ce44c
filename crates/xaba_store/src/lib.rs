//! This library handles reading and unpacking the **assembly store** blob files bundled into
//! Xamarin.Android / .NET for Android application packages.
//!
//! # Assembly Store Format Documentation
//!
//! This crate provides utilities to read and extract the managed assemblies packed into the
//! `assemblies.blob` files found inside an Android application package. A package carries one
//! *primary* store and, when the build splits assemblies per ABI, one additional
//! architecture-specific store per ABI. Packed entries are cross-referenced against the
//! plaintext `assemblies.manifest` shipped next to the stores, which carries each entry's
//! logical name and content hashes.
//!
//! ## File Structure
//!
//! A store consists of a header, a per-entry index, and (primary store only) two global hash
//! tables, followed by the entry payloads the index points into.
//!
//! | Offset (bytes) | Field             | Description                                          |
//! |----------------|-------------------|------------------------------------------------------|
//! | 0x0000         | Magic number      | 4 bytes: 0x41424158 ("XABA")                         |
//! | 0x0004         | Version           | 4 bytes: Format version, at most 1                   |
//! | 0x0008         | Local entry count | 4 bytes: Number of index records in this file        |
//! | 0x000C         | Global entry count| 4 bytes: Number of entries across all stores         |
//! | 0x0010         | Store ID          | 4 bytes: Identifier of this store                    |
//! | 0x0014         | Index records     | 24 bytes each, local entry count of them             |
//!
//! A local entry count lower than the global entry count signals that the remaining entries
//! live in architecture-specific stores that must be read separately.
//!
//! ### Index Record
//!
//! Each index record describes one packed assembly, with optional debug and config sub-blobs:
//!
//! | Offset (bytes) | Field              | Description                                         |
//! |----------------|--------------------|-----------------------------------------------------|
//! | 0x0000         | Data Offset        | 4 bytes: Offset of the assembly image in the file   |
//! | 0x0004         | Data Size          | 4 bytes: Size of the assembly image                 |
//! | 0x0008         | Debug Data Offset  | 4 bytes: Offset of the debug sub-blob, 0 if absent  |
//! | 0x000C         | Debug Data Size    | 4 bytes: Size of the debug sub-blob                 |
//! | 0x0010         | Config Data Offset | 4 bytes: Offset of the config sub-blob, 0 if absent |
//! | 0x0014         | Config Data Size   | 4 bytes: Size of the config sub-blob                |
//!
//! Offsets and sizes are byte positions into the raw store file and are only validated when an
//! entry is sliced.
//!
//! ### Global Hash Tables
//!
//! The primary store carries two lookup tables keyed by 32-bit and 64-bit name hashes, one
//! record per global entry count. All 32-bit records precede all 64-bit records:
//!
//! | Offset (bytes) | Field             | Description                                          |
//! |----------------|-------------------|------------------------------------------------------|
//! | 0x0000         | Hash              | 4 or 8 bytes: Name hash of the entry                 |
//! | +0x04 / +0x08  | Mapping Index     | 4 bytes: Position in the mapping table               |
//! | +0x08 / +0x0C  | Local Store Index | 4 bytes: Index within the owning store               |
//! | +0x0C / +0x10  | Store ID          | 4 bytes: Identifier of the owning store              |
//!
//! Architecture-specific stores omit both tables.
//!
//! ### Compressed Entries
//!
//! An entry whose payload starts with the 4-byte tag "XALZ" is block-compressed:
//!
//! | Offset (bytes) | Field               | Description                                        |
//! |----------------|---------------------|----------------------------------------------------|
//! | 0x0000         | Magic number        | 4 bytes: 0x5A4C4158 ("XALZ")                       |
//! | 0x0004         | Descriptor Index    | 4 bytes: Opaque index, surfaced in output metadata |
//! | 0x0008         | Uncompressed Length | 4 bytes: Exact size of the decoded payload         |
//! | 0x000C         | Payload             | LZ4 block-compressed assembly image                |
//!
//! Any other payload is the assembly image verbatim.
//!
//! ## Manifest
//!
//! `assemblies.manifest` is a whitespace-delimited table with one row per entry across all
//! stores: `hash32 hash64 blobId blobIdx name`. Blank lines and the `Hash ...` column header
//! are noise. The pair (blobId, blobIdx) identifies the entry; `name` is the assembly's
//! logical name without extension.
//!
//! ## Additional Information
//!
//! - **File Names**: `assemblies.blob`, `assemblies.{abi}.blob`, `assemblies.manifest`
//! - **Endianness**: Little-endian for all multi-byte integers
//! - **Compression**: LZ4 block format (not the LZ4 frame format)
//!

pub mod arch;
pub mod compression;
pub mod error;
pub mod extract;
pub mod manifest;
pub mod read;
pub mod types;

pub use arch::Architecture;
pub use extract::{ExtractedAssembly, HeaderSummary};
pub use manifest::{Manifest, ManifestEntry};
pub use read::AssemblyStore;
