//! pixel/raster.rs
//! Byte stream <-> RGB8 raster <-> PNG.
//!
//! Pixel data is row-major, three bytes per pixel in R, G, B order. The
//! flat stream read back from a PNG is byte-identical to the stream that was
//! written, which is what the block header relies on.

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, ImageFormat};

use crate::constants::BYTES_PER_PIXEL;
use crate::pixel::types::Dimensions;
use crate::types::{CodecError, CodecResult};
use crate::utils::ceil_sqrt;

/// Smallest near-square raster holding `pixel_count` pixels.
///
/// `width = ceil(sqrt(n))`, `height = ceil(n / width)`. Deterministic: the
/// same count always yields the same dimensions.
pub fn dimensions_for(pixel_count: u64) -> CodecResult<Dimensions> {
    let pixel_count = pixel_count.max(1);
    let width = ceil_sqrt(pixel_count);
    let height = pixel_count.div_ceil(width);

    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(width), Ok(height)) => Ok(Dimensions { width, height }),
        _ => Err(CodecError::Internal(format!(
            "{} pixels do not fit a PNG raster",
            pixel_count
        ))),
    }
}

/// Zero-pad `stream` in place to fill a whole raster; returns its dimensions
/// and the number of padding bytes added.
pub fn pad_to_raster(stream: &mut Vec<u8>) -> CodecResult<(Dimensions, usize)> {
    let pixel_count = stream.len().div_ceil(BYTES_PER_PIXEL) as u64;
    let dims = dimensions_for(pixel_count)?;

    let raster_len = usize::try_from(dims.total_pixels())
        .ok()
        .and_then(|px| px.checked_mul(BYTES_PER_PIXEL))
        .ok_or_else(|| CodecError::Internal("raster size overflows memory".into()))?;

    let padding = raster_len - stream.len();
    stream.resize(raster_len, 0);
    Ok((dims, padding))
}

/// Serialize a full RGB8 raster as PNG (fast deflate, no row filter).
pub fn write_png(raster: &[u8], dims: Dimensions) -> CodecResult<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new_with_quality(&mut out, CompressionType::Fast, FilterType::NoFilter)
        .write_image(raster, dims.width, dims.height, ExtendedColorType::Rgb8)
        .map_err(|e| CodecError::Internal(format!("PNG encoding failed: {}", e)))?;
    Ok(out)
}

/// Decode a PNG to its flat RGB8 byte stream.
///
/// Any colour type is converted to RGB8 first.
pub fn read_png(png: &[u8]) -> CodecResult<Vec<u8>> {
    let img = image::load_from_memory_with_format(png, ImageFormat::Png)
        .map_err(|e| CodecError::FormatMismatch(format!("could not open as PNG: {}", e)))?;
    Ok(img.into_rgb8().into_raw())
}
