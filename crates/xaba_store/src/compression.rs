//! Block compression handling for packed entry payloads.

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};
use lz4_flex::block::decompress_into;
use tracing::instrument;

use crate::error::{Error, Result};
use crate::types::COMPRESSED_DATA_MAGIC;

/// Size of the frame header preceding the compressed payload
pub const FRAME_HEADER_SIZE: usize = 12;

/// A decoded compressed entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBlock {
    /// The decompressed assembly image
    pub data: Vec<u8>,

    /// Opaque index carried in the frame header, surfaced in output metadata
    pub descriptor_index: u32,
}

/// Returns whether an entry payload carries the compression frame signature.
pub fn is_compressed(data: &[u8]) -> bool {
    data.len() >= COMPRESSED_DATA_MAGIC.len() && data[..COMPRESSED_DATA_MAGIC.len()] == COMPRESSED_DATA_MAGIC
}

/// Decode a compressed entry payload.
///
/// The frame header declares the exact uncompressed length; the LZ4 block payload after it
/// must decode to exactly that many bytes or the entry is rejected with
/// [`Error::DecompressionSizeMismatch`].
#[instrument(skip(data), err)]
pub fn decompress(data: &[u8]) -> Result<DecodedBlock> {
    if data.len() < FRAME_HEADER_SIZE {
        return Err(Error::TruncatedFrame { len: data.len() });
    }

    let mut header = Cursor::new(&data[COMPRESSED_DATA_MAGIC.len()..FRAME_HEADER_SIZE]);
    let descriptor_index = header.read_u32::<LittleEndian>()?;
    let uncompressed_len = header.read_u32::<LittleEndian>()? as usize;

    let mut decoded = vec![0u8; uncompressed_len];
    let actual = decompress_into(&data[FRAME_HEADER_SIZE..], &mut decoded)?;
    if actual != uncompressed_len {
        return Err(Error::DecompressionSizeMismatch {
            expected: uncompressed_len,
            actual,
        });
    }

    Ok(DecodedBlock {
        data: decoded,
        descriptor_index,
    })
}
