//! headers/mod.rs
//! Block header: magic, version, payload length, CRC-32 and filename.
//!
//! Notes:
//! - One header shape for both carriers; `BlockFormat` selects magic and version width.
//! - Big-endian across all multi-byte integers.
//! - Decoding fails closed on unknown versions; no best-effort forward parsing.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
