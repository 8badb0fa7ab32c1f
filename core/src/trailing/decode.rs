//! trailing/decode.rs
//! Block extraction: locate, optionally open, then verify.
//!
//! The block must fill the space up to the end marker exactly, sealed or not.

use crate::crypto::{self, ENVELOPE_HEADER_LEN};
use crate::headers::{parse, slice_payload, verify_checksum, BlockFormat};
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::trailing::locate::locate;
use crate::trailing::types::{AudioExtracted, BlockMarker};
use crate::types::{CodecError, CodecResult};

/// Recover the payload appended by [`embed_in_audio`](crate::trailing::embed_in_audio).
///
/// # Errors
/// - `NotEncoded` when the end marker is missing.
/// - `Corrupted` when no start marker precedes it, when bytes the header does
///   not account for sit before the end marker, or when the CRC does not match.
/// - `InvalidPassword` for a sealed block without a password.
/// - `Truncated` when a declared length runs past the block.
/// - `DecryptionFailed` on a wrong password or a tampered envelope.
pub fn extract_from_audio(carrier: &[u8], password: Option<&str>) -> CodecResult<AudioExtracted> {
    let mut timer = TelemetryTimer::new();
    let mut counters = TelemetryCounters::default();
    counters.set_carrier(carrier.len());

    let found = timer.time(Stage::Locate, || locate(carrier))?;
    counters.add_host(found.start);
    let region = &carrier[found.start..found.end];

    let opened;
    let block: &[u8] = match found.marker {
        BlockMarker::Sealed => {
            let password = crypto::require_password(password)?;
            crypto::sealed_extent(region)?;
            opened = timer.time(Stage::Decrypt, || crypto::open(region, password))?;
            counters.add_envelope(ENVELOPE_HEADER_LEN);
            &opened
        }
        BlockMarker::Plain => region,
    };

    let header = timer.time(Stage::Header, || parse(BlockFormat::Audio, block))?;
    counters.add_header(header.header_total_bytes);

    let payload = slice_payload(&header, block)?;
    if header.block_len() != Some(block.len() as u64) {
        return Err(CodecError::Corrupted(format!(
            "block declares {} bytes but {} precede the end marker",
            header.header_total_bytes as u64 + header.data_length,
            block.len()
        )));
    }
    timer.time(Stage::Checksum, || verify_checksum(&header, payload))?;
    counters.add_payload(payload.len());
    timer.finish();

    Ok(AudioExtracted {
        payload: payload.to_vec(),
        filename: header.filename,
        payload_size: header.data_length,
        telemetry: TelemetrySnapshot::from(&counters, &timer),
    })
}
