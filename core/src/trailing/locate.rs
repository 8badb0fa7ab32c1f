//! trailing/locate.rs
//! Find the trailing block inside a carrier without copying it.
//!
//! Marker bytes are not unique: host audio may hold stale markers from other
//! tools, and a payload may itself be a carrier with its own block. A start
//! marker is only trusted when the block behind it ends exactly at the end
//! marker. When several do, the outermost one is the block this codec wrote,
//! since anything after it lies inside its payload.

use crate::constants::{MAGIC_AUDIO, MAGIC_AUDIO_END, MAGIC_ENVELOPE};
use crate::crypto::sealed_extent;
use crate::headers::{parse, BlockFormat};
use crate::trailing::types::{BlockMarker, LocatedBlock};
use crate::types::{CodecError, CodecResult};

/// Marker length shared by the plain, sealed and end markers.
pub const MARKER_LEN: usize = 8;

/// True when `carrier` ends with the end-of-block marker.
#[inline]
pub fn has_end_marker(carrier: &[u8]) -> bool {
    carrier.ends_with(&MAGIC_AUDIO_END)
}

fn marker_kind(window: &[u8]) -> Option<BlockMarker> {
    if window == MAGIC_AUDIO {
        Some(BlockMarker::Plain)
    } else if window == MAGIC_ENVELOPE {
        Some(BlockMarker::Sealed)
    } else {
        None
    }
}

/// Every plain or sealed start marker that begins and ends before `end`, in
/// carrier order.
fn start_markers(
    carrier: &[u8],
    end: usize,
) -> impl DoubleEndedIterator<Item = (BlockMarker, usize)> + '_ {
    carrier
        .get(..end)
        .unwrap_or_default()
        .windows(MARKER_LEN)
        .enumerate()
        .filter_map(|(pos, w)| marker_kind(w).map(|marker| (marker, pos)))
}

/// True when the block opened by `marker` fills `region` exactly.
fn fills_region(marker: BlockMarker, region: &[u8]) -> bool {
    match marker {
        BlockMarker::Plain => parse(BlockFormat::Audio, region)
            .ok()
            .and_then(|header| header.block_len())
            .is_some_and(|len| len == region.len() as u64),
        BlockMarker::Sealed => sealed_extent(region).is_ok_and(|len| len == region.len()),
    }
}

/// Last start marker before `end`, consistent or not.
pub fn find_start_marker(carrier: &[u8], end: usize) -> Option<(BlockMarker, usize)> {
    start_markers(carrier, end).next_back()
}

/// Outermost start marker whose block ends exactly at `end`.
pub fn find_block(carrier: &[u8], end: usize) -> Option<LocatedBlock> {
    start_markers(carrier, end)
        .find(|&(marker, start)| fills_region(marker, &carrier[start..end]))
        .map(|(marker, start)| LocatedBlock { marker, start, end })
}

/// Locate the block of a carrier.
///
/// Falls back to the last start marker when no candidate is structurally
/// consistent, so the decoder reports why that block is unreadable.
///
/// # Errors
/// - `NotEncoded` when the carrier does not end with the end marker.
/// - `Corrupted` when the end marker is present but no start marker precedes it.
pub fn locate(carrier: &[u8]) -> CodecResult<LocatedBlock> {
    if !has_end_marker(carrier) {
        return Err(CodecError::NotEncoded(
            "no trailing block found; the file was never encoded or was truncated".into(),
        ));
    }
    let end = carrier.len() - MARKER_LEN;
    if let Some(found) = find_block(carrier, end) {
        return Ok(found);
    }
    match find_start_marker(carrier, end) {
        Some((marker, start)) => Ok(LocatedBlock { marker, start, end }),
        None => Err(CodecError::Corrupted(
            "end marker present but block header is missing or overwritten".into(),
        )),
    }
}
