use std::fmt;

use crate::constants::{kdf::SALT_LEN, MAGIC_ENVELOPE};

/// Stable key size for AES-256.
pub const KEY_LEN_32: usize = 32;

/// Nonce length stored in the envelope.
///
/// AES-GCM's usual nonce is 12 bytes; the envelope format carries 16, and
/// GCM derives its counter block from a GHASH of the longer nonce.
pub const NONCE_LEN_16: usize = 16;

/// Fixed AEAD tag length (bytes).
pub const TAG_LEN: usize = 16;

/// Width of the big-endian ciphertext length field.
pub const CIPHERTEXT_LEN_FIELD: usize = 8;

/// Fixed envelope header: magic | salt | nonce | tag | ciphertext_len.
pub const ENVELOPE_HEADER_LEN: usize =
    MAGIC_ENVELOPE.len() + SALT_LEN + NONCE_LEN_16 + TAG_LEN + CIPHERTEXT_LEN_FIELD;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Password argument empty.
    InvalidPassword,

    /// Data is sealed but the caller supplied no password.
    PasswordRequired,

    /// Envelope declares more ciphertext than the carrier holds.
    Truncated { declared: u64, available: usize },

    /// Envelope malformed, wrong password, or tampered. Deliberately one variant.
    DecryptionFailed(String),

    /// Internal cipher or KDF failure.
    Failure(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CryptoError::*;
        match self {
            InvalidPassword =>
                write!(f, "password must be a non-empty string"),
            PasswordRequired =>
                write!(f, "carrier holds encrypted data but no password was provided"),
            Truncated { declared, available } =>
                write!(f, "envelope declares {} ciphertext bytes but only {} are available",
                       declared, available),
            DecryptionFailed(msg) =>
                write!(f, "{}", msg),
            Failure(msg) =>
                write!(f, "crypto failure: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}
