//! crypto/mod.rs
//! Encryption envelope: PBKDF2 key derivation, AES-256-GCM, and the wire wrapper.

pub mod types;
pub mod kdf;
pub mod aead;
pub mod envelope;

pub use types::*;
pub use kdf::*;
pub use aead::*;
pub use envelope::{is_sealed, open, require_password, seal, sealed_extent};
