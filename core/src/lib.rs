//! soundpixel-core
//!
//! Pure Rust carrier codecs: any file packed losslessly into PNG pixels, or
//! appended as a trailing block after MP3 audio, with an optional
//! password-based encryption envelope.
//! No Python, no PyO3, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

pub mod headers;
pub mod crypto;
pub mod telemetry;

// Carriers
pub mod pixel;
pub mod trailing;

pub use pixel::{pack_to_image, unpack_from_image};
pub use trailing::{embed_in_audio, extract_from_audio};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::pixel::{pack_to_image, unpack_from_image, ImageDecoded, ImageEncoded};
    pub use crate::telemetry::TelemetrySnapshot;
    pub use crate::trailing::{embed_in_audio, extract_from_audio, AudioEmbedded, AudioExtracted};
    pub use crate::types::{CodecError, CodecResult, ErrorKind};
}
