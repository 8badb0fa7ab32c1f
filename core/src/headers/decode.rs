//! src/headers/decode.rs
//!
//! Header decoding and payload verification.
//!
//! Design notes:
//! - Field order must match `encode.rs` exactly.
//! - Every length read from the stream is checked against the bytes actually
//!   present before a slice is taken.
//! - Parsing never reads past `header_total_bytes`.

use byteorder::{BigEndian, ByteOrder};

use crate::headers::types::{BlockFormat, BlockHeader, BlockVersion, HeaderError};
use crate::utils::{compute_crc32, decode_filename};

/// Parse the header at the start of `stream`.
///
/// # Errors
/// - `BufferTooShort` / `InvalidMagic` when the stream is not this format.
/// - `UnsupportedVersion` when the magic matches but the version does not.
/// - `FilenameTruncated` when the stream ends inside the filename field.
pub fn parse(format: BlockFormat, stream: &[u8]) -> Result<BlockHeader, HeaderError> {
    let prefix = format.prefix_len();
    if stream.len() < prefix {
        return Err(HeaderError::BufferTooShort { have: stream.len(), need: prefix });
    }

    let magic = format.magic();
    if &stream[..magic.len()] != magic {
        return Err(HeaderError::InvalidMagic {
            have: stream[..magic.len()].to_vec(),
            need: magic,
        });
    }

    let mut i = magic.len();
    let raw_version = match format.version_len() {
        4 => BigEndian::read_u32(&stream[i..i + 4]),
        _ => u32::from(BigEndian::read_u16(&stream[i..i + 2])),
    };
    i += format.version_len();

    let supported = format.version();
    let version = match BlockVersion::try_from(raw_version) {
        Ok(v) if v == supported => v,
        _ => {
            return Err(HeaderError::UnsupportedVersion {
                have: raw_version,
                supported: supported as u32,
            })
        }
    };

    let data_length = BigEndian::read_u64(&stream[i..i + 8]);
    i += 8;
    let crc32 = BigEndian::read_u32(&stream[i..i + 4]);
    i += 4;
    let fname_len = BigEndian::read_u16(&stream[i..i + 2]) as usize;
    i += 2;
    debug_assert_eq!(i, prefix);

    let header_total_bytes = prefix + fname_len;
    if stream.len() < header_total_bytes {
        return Err(HeaderError::FilenameTruncated {
            have: stream.len(),
            need: header_total_bytes,
        });
    }

    Ok(BlockHeader {
        version,
        data_length,
        crc32,
        filename: decode_filename(&stream[prefix..header_total_bytes]),
        header_total_bytes,
    })
}

/// Exactly the payload bytes the header describes.
pub fn slice_payload<'a>(header: &BlockHeader, stream: &'a [u8]) -> Result<&'a [u8], HeaderError> {
    let start = header.header_total_bytes;
    let available = stream.len().saturating_sub(start);
    match usize::try_from(header.data_length) {
        Ok(len) if len <= available => Ok(&stream[start..start + len]),
        _ => Err(HeaderError::PayloadTruncated { declared: header.data_length, available }),
    }
}

pub fn verify_checksum(header: &BlockHeader, data: &[u8]) -> Result<(), HeaderError> {
    let actual = compute_crc32(data);
    if actual != header.crc32 {
        return Err(HeaderError::ChecksumMismatch { expected: header.crc32, actual });
    }
    Ok(())
}
