//! trailing/types.rs
//! Results of the trailing-block codec and the located block.

use crate::telemetry::TelemetrySnapshot;

/// Output of [`embed_in_audio`](crate::trailing::embed_in_audio).
#[derive(Debug, Clone)]
pub struct AudioEmbedded {
    /// Host audio followed by the appended block.
    pub carrier: Vec<u8>,
    /// Host length after stripping any previously appended block.
    pub host_size: usize,
    pub payload_size: usize,
    pub total_size: usize,
    pub telemetry: TelemetrySnapshot,
}

/// Output of [`extract_from_audio`](crate::trailing::extract_from_audio).
#[derive(Debug, Clone)]
pub struct AudioExtracted {
    pub payload: Vec<u8>,
    pub filename: String,
    pub payload_size: u64,
    pub telemetry: TelemetrySnapshot,
}

/// Which start-of-block marker opened the trailing block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMarker {
    Plain,
    Sealed,
}

/// A start marker found by the backward scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatedBlock {
    pub marker: BlockMarker,
    /// Offset of the start marker in the carrier.
    pub start: usize,
    /// Offset of the end-of-block marker; the block is `start..end`.
    pub end: usize,
}
