//! pixel/encode.rs
//!
//! Pixel packing.
//!
//! Design notes:
//! - The header is built over the caller's bytes before any sealing.
//! - Padding is zero-filled and only ever appended after the block.
//! - Dimensions depend on the stream length alone.

use crate::crypto::{self, ENVELOPE_HEADER_LEN};
use crate::headers::{build_block, BlockFormat};
use crate::pixel::raster::{pad_to_raster, write_png};
use crate::pixel::types::ImageEncoded;
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::CodecResult;

/// Pack `data` into a lossless PNG.
///
/// Layout of the pixel stream, row-major, three bytes per pixel:
///
/// ```text
/// plain:  HEADER | DATA | zero padding
/// sealed: ENVELOPE(HEADER | DATA) | zero padding
/// ```
///
/// The header's length and CRC describe `data` itself, so decoding verifies
/// the payload after the envelope has been opened.
pub fn pack_to_image(
    data: &[u8],
    filename: &str,
    password: Option<&str>,
) -> CodecResult<ImageEncoded> {
    let mut timer = TelemetryTimer::new();
    let mut counters = TelemetryCounters::default();

    let mut stream = timer.time(Stage::Header, || build_block(BlockFormat::Image, data, filename));
    counters.add_payload(data.len());
    counters.add_header(stream.len() - data.len());

    if let Some(password) = password {
        stream = timer.time(Stage::Encrypt, || crypto::seal(&stream, password))?;
        counters.add_envelope(ENVELOPE_HEADER_LEN);
    }

    let (dims, padding) = pad_to_raster(&mut stream)?;
    counters.add_padding(padding);

    let png = timer.time(Stage::Raster, || write_png(&stream, dims))?;
    counters.set_carrier(png.len());
    timer.finish();

    Ok(ImageEncoded {
        png,
        width: dims.width,
        height: dims.height,
        total_pixels: dims.total_pixels(),
        payload_size: data.len(),
        telemetry: TelemetrySnapshot::from(&counters, &timer),
    })
}
