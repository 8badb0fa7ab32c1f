//! pixel/decode.rs
//! Pixel unpacking: read raster, cut out the envelope if sealed, verify the block.

use crate::crypto::{self, ENVELOPE_HEADER_LEN};
use crate::headers::{parse, slice_payload, verify_checksum, BlockFormat};
use crate::pixel::raster::read_png;
use crate::pixel::types::ImageDecoded;
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::CodecResult;

/// Recover the payload packed by [`pack_to_image`](crate::pixel::pack_to_image).
///
/// A carrier that was re-encoded lossily scrambles the pixel stream; that
/// surfaces as `FormatMismatch`, `Truncated`, `Corrupted` or `DecryptionFailed`,
/// never as wrong bytes.
pub fn unpack_from_image(png: &[u8], password: Option<&str>) -> CodecResult<ImageDecoded> {
    let mut timer = TelemetryTimer::new();
    let mut counters = TelemetryCounters::default();
    counters.set_carrier(png.len());

    let stream = timer.time(Stage::Raster, || read_png(png))?;

    let opened;
    let block: &[u8] = if crypto::is_sealed(&stream) {
        let password = crypto::require_password(password)?;
        // Padding follows the envelope; cut it to its declared extent first.
        let extent = crypto::sealed_extent(&stream)?;
        opened = timer.time(Stage::Decrypt, || crypto::open(&stream[..extent], password))?;
        counters.add_envelope(ENVELOPE_HEADER_LEN);
        &opened
    } else {
        &stream
    };

    let header = timer.time(Stage::Header, || parse(BlockFormat::Image, block))?;
    counters.add_header(header.header_total_bytes);

    let data = slice_payload(&header, block)?;
    timer.time(Stage::Checksum, || verify_checksum(&header, data))?;
    counters.add_payload(data.len());
    counters.add_padding(block.len() - header.header_total_bytes - data.len());
    timer.finish();

    Ok(ImageDecoded {
        data: data.to_vec(),
        filename: header.filename,
        data_length: header.data_length,
        telemetry: TelemetrySnapshot::from(&counters, &timer),
    })
}
