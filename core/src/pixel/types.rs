//! pixel/types.rs
//! Results of the pixel-packing codec and raster dimensions.

use crate::telemetry::TelemetrySnapshot;

/// Output of [`pack_to_image`](crate::pixel::pack_to_image).
#[derive(Debug, Clone)]
pub struct ImageEncoded {
    /// Serialized PNG file.
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// `width * height`, including zero-filled slots.
    pub total_pixels: u64,
    /// Length of the caller's input.
    pub payload_size: usize,
    pub telemetry: TelemetrySnapshot,
}

/// Output of [`unpack_from_image`](crate::pixel::unpack_from_image).
#[derive(Debug, Clone)]
pub struct ImageDecoded {
    pub data: Vec<u8>,
    pub filename: String,
    pub data_length: u64,
    pub telemetry: TelemetrySnapshot,
}

/// Raster dimensions chosen for a pixel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn total_pixels(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}
