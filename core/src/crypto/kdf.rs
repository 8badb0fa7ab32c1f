//! crypto/kdf.rs
//! Password-based key derivation for the envelope.
//!
//! Design:
//! - PBKDF2-HMAC-SHA256(password, salt, 100k rounds) -> 32-byte AES key.
//! - Salt is random per envelope, so the same password never yields the same key twice.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::constants::kdf::{PBKDF2_ITERATIONS, SALT_LEN};
use crate::crypto::types::{CryptoError, KEY_LEN_32};

/// Derive the 32-byte envelope key from a password and salt.
///
/// The key is wiped from memory when the returned wrapper drops.
///
/// Errors:
/// - Empty password returns `CryptoError::InvalidPassword`.
#[inline]
pub fn derive_key_32(
    password: &str,
    salt: &[u8; SALT_LEN],
) -> Result<Zeroizing<[u8; KEY_LEN_32]>, CryptoError> {
    if password.is_empty() {
        return Err(CryptoError::InvalidPassword);
    }

    let mut key = Zeroizing::new([0u8; KEY_LEN_32]);
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, key.as_mut_slice());
    Ok(key)
}
