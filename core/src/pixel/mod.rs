//! pixel/mod.rs
//! Pixel-packing codec: any byte buffer as a lossless RGB PNG.
//!
//! Bytes are packed three per pixel, row-major, into the smallest near-square
//! raster that holds them. A block header in front of the payload carries the
//! exact length, CRC-32 and filename so padding can be discarded on decode.

pub mod types;
pub mod raster;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::pack_to_image;
pub use decode::unpack_from_image;
