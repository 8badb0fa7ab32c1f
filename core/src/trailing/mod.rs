//! trailing/mod.rs
//! Trailing-block codec: a payload appended after the last byte of host audio.
//!
//! Players stop at the last valid frame, so the block is inert to them. It is
//! found again from the end of the file: end marker first, then the start
//! marker whose block fills the space up to it.

pub mod types;
pub mod locate;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::embed_in_audio;
pub use decode::extract_from_audio;
