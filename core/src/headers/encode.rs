//! src/headers/encode.rs
//!
//! Header encoding.
//!
//! Design notes:
//! - Writes the big-endian layout described in `types.rs`.
//! - CRC and length always describe the plaintext payload, even when the
//!   block is sealed afterwards.
//! - Filenames are cut to 255 encoded bytes.

use crate::constants::MAX_FILENAME_BYTES;
use crate::headers::types::BlockFormat;
use crate::utils::{compute_crc32, truncate_filename};

/// Build the header that precedes `payload` in a block of the given format.
pub fn build(format: BlockFormat, payload: &[u8], filename: &str) -> Vec<u8> {
    let fname = truncate_filename(filename, MAX_FILENAME_BYTES);
    let crc = compute_crc32(payload);

    let mut out = Vec::with_capacity(format.prefix_len() + fname.len());
    out.extend_from_slice(format.magic());

    let version = format.version() as u32;
    match format {
        BlockFormat::Image => out.extend_from_slice(&version.to_be_bytes()),
        BlockFormat::Audio => out.extend_from_slice(&(version as u16).to_be_bytes()),
    }
    out.extend_from_slice(&(payload.len() as u64).to_be_bytes());
    out.extend_from_slice(&crc.to_be_bytes());
    out.extend_from_slice(&(fname.len() as u16).to_be_bytes());
    out.extend_from_slice(fname);

    debug_assert_eq!(out.len(), format.prefix_len() + fname.len());
    out
}

/// Header followed by the payload: the unit that is packed or sealed.
pub fn build_block(format: BlockFormat, payload: &[u8], filename: &str) -> Vec<u8> {
    let mut block = build(format, payload, filename);
    block.reserve_exact(payload.len());
    block.extend_from_slice(payload);
    block
}
