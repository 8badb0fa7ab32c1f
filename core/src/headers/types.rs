//! headers/types.rs
//! Block header layouts and the parsed header view.
//!
//! Both carriers use the same shape, differing only in magic and version width:
//!
//! ```text
//! image: MAGIC(4) | VERSION(u32) | DATA_LEN(u64) | CRC32(u32) | FNAME_LEN(u16) | FNAME
//! audio: MAGIC(8) | VERSION(u16) | DATA_LEN(u64) | CRC32(u32) | FNAME_LEN(u16) | FNAME
//! ```
//!
//! All integers are big-endian.

use std::fmt;

use num_enum::TryFromPrimitive;

use crate::constants::{field_len, AUDIO_VERSION_V2, IMAGE_VERSION_V1, MAGIC_AUDIO, MAGIC_IMAGE};
use crate::utils::{enum_name_or_hex, fmt_bytes};

/// Versions known to this build.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum BlockVersion {
    Image = 1,
    Audio = 2,
}

const _: () = assert!(BlockVersion::Image as u32 == IMAGE_VERSION_V1);
const _: () = assert!(BlockVersion::Audio as u32 == AUDIO_VERSION_V2 as u32);

/// Which carrier's header layout to use.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlockFormat {
    Image,
    Audio,
}

impl BlockFormat {
    pub fn magic(self) -> &'static [u8] {
        match self {
            BlockFormat::Image => &MAGIC_IMAGE,
            BlockFormat::Audio => &MAGIC_AUDIO,
        }
    }

    pub fn version(self) -> BlockVersion {
        match self {
            BlockFormat::Image => BlockVersion::Image,
            BlockFormat::Audio => BlockVersion::Audio,
        }
    }

    /// Width of the version field in bytes.
    pub fn version_len(self) -> usize {
        match self {
            BlockFormat::Image => 4,
            BlockFormat::Audio => 2,
        }
    }

    /// Fixed prefix length, everything before the filename bytes.
    pub fn prefix_len(self) -> usize {
        self.magic().len()
            + self.version_len()
            + field_len::DATA_LEN
            + field_len::CRC32
            + field_len::FILENAME_LEN
    }
}

/// Parsed block header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: BlockVersion,
    /// Exact payload length, never the padded carrier length.
    pub data_length: u64,
    /// CRC-32 of the unencrypted payload.
    pub crc32: u32,
    pub filename: String,
    /// `prefix_len + filename byte length`; the payload starts here.
    pub header_total_bytes: usize,
}

impl BlockHeader {
    /// Header plus declared payload length; `None` on overflow.
    pub fn block_len(&self) -> Option<u64> {
        u64::try_from(self.header_total_bytes).ok()?.checked_add(self.data_length)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// Stream shorter than the fixed prefix.
    BufferTooShort { have: usize, need: usize },

    /// Magic does not match the expected format.
    InvalidMagic { have: Vec<u8>, need: &'static [u8] },

    /// Magic matched, version unknown.
    UnsupportedVersion { have: u32, supported: u32 },

    /// Stream ends inside the filename field.
    FilenameTruncated { have: usize, need: usize },

    /// Fewer payload bytes than `data_length` declares.
    PayloadTruncated { declared: u64, available: usize },

    /// CRC-32 of the sliced payload differs from the header.
    ChecksumMismatch { expected: u32, actual: u32 },
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use HeaderError::*;
        match self {
            BufferTooShort { have, need } =>
                write!(f, "stream too short for header: {} < {} bytes", have, need),
            InvalidMagic { have, need } =>
                write!(f, "invalid magic: expected {}, got {}", fmt_bytes(need), fmt_bytes(have)),
            UnsupportedVersion { have, supported } =>
                write!(f, "unsupported block version {} (this build supports {})",
                       enum_name_or_hex::<BlockVersion>(*have), supported),
            FilenameTruncated { have, need } =>
                write!(f, "filename field is truncated: header needs {} bytes, stream has {}",
                       need, have),
            PayloadTruncated { declared, available } =>
                write!(f, "data length claims {} bytes but only {} remain after the header",
                       declared, available),
            ChecksumMismatch { expected, actual } =>
                write!(f, "CRC-32 mismatch: expected 0x{:08X}, got 0x{:08X}", expected, actual),
        }
    }
}

impl std::error::Error for HeaderError {}
