//! telemetry/counters.rs
//! Byte counters filled during a single encode or decode call.
//!
//! Converted into an immutable `TelemetrySnapshot` when the call returns.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    /// Caller payload bytes (in on encode, out on decode).
    pub bytes_payload: u64,
    /// Block header bytes (magic, fixed fields, filename).
    pub bytes_header: u64,
    /// Envelope overhead: fixed envelope header, zero when unencrypted.
    pub bytes_envelope: u64,
    /// Zero padding added to fill the raster.
    pub bytes_padding: u64,
    /// Untouched host audio bytes.
    pub bytes_host: u64,
    /// Size of the carrier produced or consumed.
    pub bytes_carrier: u64,
    /// Number of envelopes sealed or opened.
    pub envelopes: u64,
}

impl TelemetryCounters {
    pub fn add_payload(&mut self, len: usize) {
        self.bytes_payload += len as u64;
    }

    pub fn add_header(&mut self, header_len: usize) {
        self.bytes_header += header_len as u64;
    }

    /// Record one envelope; `overhead_len` is everything but the ciphertext.
    pub fn add_envelope(&mut self, overhead_len: usize) {
        self.envelopes += 1;
        self.bytes_envelope += overhead_len as u64;
    }

    pub fn add_padding(&mut self, len: usize) {
        self.bytes_padding += len as u64;
    }

    pub fn add_host(&mut self, len: usize) {
        self.bytes_host += len as u64;
    }

    pub fn set_carrier(&mut self, len: usize) {
        self.bytes_carrier = len as u64;
    }

    /// Bytes spent on anything other than the payload and the host.
    pub fn overhead_bytes(&self) -> u64 {
        self.bytes_header + self.bytes_envelope + self.bytes_padding
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.bytes_payload  += rhs.bytes_payload;
        self.bytes_header   += rhs.bytes_header;
        self.bytes_envelope += rhs.bytes_envelope;
        self.bytes_padding  += rhs.bytes_padding;
        self.bytes_host     += rhs.bytes_host;
        self.bytes_carrier  += rhs.bytes_carrier;
        self.envelopes      += rhs.envelopes;
    }
}
