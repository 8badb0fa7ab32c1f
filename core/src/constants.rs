//! constants.rs
//! Process-wide format constants shared by both carriers.
//!
//! Every value here is part of the wire format. Changing one breaks the
//! ability to read carriers produced by earlier builds.

/// Magic marker for the block stored inside PNG pixel data.
pub const MAGIC_IMAGE: [u8; 4] = *b"SPXL";
/// Only image block version this build understands.
pub const IMAGE_VERSION_V1: u32 = 1;

/// Start-of-block marker for an unencrypted block appended to audio.
pub const MAGIC_AUDIO: [u8; 8] = *b"SPXLV2\x00\x00";
/// Only audio block version this build understands.
pub const AUDIO_VERSION_V2: u16 = 2;

/// End-of-block marker, written after every audio block (plain or sealed).
pub const MAGIC_AUDIO_END: [u8; 8] = *b"SPXLEND\x00";

/// Envelope magic. Also serves as the start marker of a sealed audio block.
pub const MAGIC_ENVELOPE: [u8; 8] = *b"SPXLENC\x00";

/// Filenames are capped on their UTF-8 encoded length.
pub const MAX_FILENAME_BYTES: usize = 255;

/// Field widths shared by both header layouts (after magic and version).
pub mod field_len {
    pub const DATA_LEN: usize = 8;
    pub const CRC32: usize = 4;
    pub const FILENAME_LEN: usize = 2;
}

/// Key derivation parameters (PBKDF2-HMAC-SHA256).
pub mod kdf {
    pub const PBKDF2_ITERATIONS: u32 = 100_000;
    pub const SALT_LEN: usize = 16;
}

/// Bytes per pixel in the RGB8 raster.
pub const BYTES_PER_PIXEL: usize = 3;
