//! trailing/encode.rs
//!
//! Block appending.
//!
//! Design notes:
//! - Host bytes are copied untouched; nothing inside the audio stream changes.
//! - A previous block is replaced, never stacked.
//! - The end marker is written last, after the plain or sealed block.

use crate::constants::MAGIC_AUDIO_END;
use crate::crypto::{self, ENVELOPE_HEADER_LEN};
use crate::headers::{build_block, BlockFormat};
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::trailing::locate::{find_block, has_end_marker, MARKER_LEN};
use crate::trailing::types::AudioEmbedded;
use crate::types::CodecResult;

/// Host bytes with any block appended by an earlier embed removed.
///
/// Only a block that ends exactly at the end marker is stripped; a host whose
/// tail merely looks like a carrier is kept whole.
fn strip_previous_block(host: &[u8]) -> &[u8] {
    if !has_end_marker(host) {
        return host;
    }
    match find_block(host, host.len() - MARKER_LEN) {
        Some(found) => &host[..found.start],
        None => host,
    }
}

/// Append `payload` after the last byte of `host`.
///
/// ```text
/// plain:  HOST | HEADER | PAYLOAD | END
/// sealed: HOST | ENVELOPE(HEADER | PAYLOAD) | END
/// ```
///
/// The header magic doubles as the plain start marker and the envelope magic
/// as the sealed one. Embedding into a carrier replaces its block.
pub fn embed_in_audio(
    host: &[u8],
    payload: &[u8],
    filename: &str,
    password: Option<&str>,
) -> CodecResult<AudioEmbedded> {
    let mut timer = TelemetryTimer::new();
    let mut counters = TelemetryCounters::default();

    let host = timer.time(Stage::Locate, || strip_previous_block(host));
    counters.add_host(host.len());

    let mut block = timer.time(Stage::Header, || build_block(BlockFormat::Audio, payload, filename));
    counters.add_payload(payload.len());
    counters.add_header(block.len() - payload.len());

    if let Some(password) = password {
        block = timer.time(Stage::Encrypt, || crypto::seal(&block, password))?;
        counters.add_envelope(ENVELOPE_HEADER_LEN);
    }

    let mut carrier = Vec::with_capacity(host.len() + block.len() + MAGIC_AUDIO_END.len());
    carrier.extend_from_slice(host);
    carrier.extend_from_slice(&block);
    carrier.extend_from_slice(&MAGIC_AUDIO_END);
    counters.set_carrier(carrier.len());
    timer.finish();

    Ok(AudioEmbedded {
        host_size: host.len(),
        payload_size: payload.len(),
        total_size: carrier.len(),
        carrier,
        telemetry: TelemetrySnapshot::from(&counters, &timer),
    })
}
