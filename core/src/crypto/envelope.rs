//! crypto/envelope.rs
//! Password-based authenticated encryption of an opaque buffer.
//!
//! Wire layout (big-endian):
//!
//! ```text
//! MAGIC(8) | SALT(16) | NONCE(16) | TAG(16) | CIPHERTEXT_LEN(8) | CIPHERTEXT
//! ```
//!
//! The envelope knows nothing about carriers. Codecs hand it the whole
//! header+payload unit and get the whole unit back.

use byteorder::{BigEndian, ByteOrder};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::constants::{kdf::SALT_LEN, MAGIC_ENVELOPE};
use crate::crypto::aead::EnvelopeCipher;
use crate::crypto::kdf::derive_key_32;
use crate::crypto::types::{
    CryptoError, CIPHERTEXT_LEN_FIELD, ENVELOPE_HEADER_LEN, NONCE_LEN_16, TAG_LEN,
};

const SALT_OFFSET: usize = MAGIC_ENVELOPE.len();
const NONCE_OFFSET: usize = SALT_OFFSET + SALT_LEN;
const TAG_OFFSET: usize = NONCE_OFFSET + NONCE_LEN_16;
const LEN_OFFSET: usize = TAG_OFFSET + TAG_LEN;

/// True iff `buf` begins with the envelope magic.
#[inline]
pub fn is_sealed(buf: &[u8]) -> bool {
    buf.starts_with(&MAGIC_ENVELOPE)
}

/// The password to open a sealed carrier with; absent or empty is an error.
#[inline]
pub fn require_password(password: Option<&str>) -> Result<&str, CryptoError> {
    match password {
        Some(p) if !p.is_empty() => Ok(p),
        _ => Err(CryptoError::PasswordRequired),
    }
}

/// Encrypt `plaintext` under `password` with a fresh salt and nonce.
///
/// Both come from the OS CSPRNG on every call.
pub fn seal(plaintext: &[u8], password: &str) -> Result<Vec<u8>, CryptoError> {
    if password.is_empty() {
        return Err(CryptoError::InvalidPassword);
    }

    let mut salt = [0u8; SALT_LEN];
    let mut nonce = [0u8; NONCE_LEN_16];
    OsRng.fill_bytes(&mut salt);
    OsRng.fill_bytes(&mut nonce);

    let key = derive_key_32(password, &salt)?;
    let (ciphertext, tag) = EnvelopeCipher::new(&key)?.seal(&nonce, plaintext)?;

    let mut out = Vec::with_capacity(ENVELOPE_HEADER_LEN + ciphertext.len());
    out.extend_from_slice(&MAGIC_ENVELOPE);
    out.extend_from_slice(&salt);
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&tag);
    out.extend_from_slice(&(ciphertext.len() as u64).to_be_bytes());
    out.extend_from_slice(&ciphertext);

    debug_assert_eq!(out.len(), ENVELOPE_HEADER_LEN + ciphertext.len());
    Ok(out)
}

/// Total byte length the envelope at the start of `buf` declares for itself.
///
/// Lets a codec cut an envelope out of a padded stream before opening it.
///
/// Errors:
/// - `DecryptionFailed` when the fixed header is short or the magic is wrong.
/// - `Truncated` when the declared ciphertext runs past the end of `buf`.
pub fn sealed_extent(buf: &[u8]) -> Result<usize, CryptoError> {
    if buf.len() < ENVELOPE_HEADER_LEN {
        return Err(CryptoError::DecryptionFailed(format!(
            "encrypted data too short: {} < {} bytes",
            buf.len(),
            ENVELOPE_HEADER_LEN
        )));
    }
    if !is_sealed(buf) {
        return Err(CryptoError::DecryptionFailed(
            "not an encrypted block (envelope magic missing)".into(),
        ));
    }

    let declared = BigEndian::read_u64(&buf[LEN_OFFSET..LEN_OFFSET + CIPHERTEXT_LEN_FIELD]);
    let available = buf.len() - ENVELOPE_HEADER_LEN;
    match usize::try_from(declared) {
        Ok(len) if len <= available => Ok(ENVELOPE_HEADER_LEN + len),
        _ => Err(CryptoError::Truncated { declared, available }),
    }
}

/// Decrypt an envelope produced by [`seal`].
///
/// `envelope` must be exactly one envelope: the declared ciphertext length has
/// to match the remaining bytes. Every structural or authentication failure
/// reports `DecryptionFailed`, so callers cannot tell a wrong password from
/// tampering.
pub fn open(envelope: &[u8], password: &str) -> Result<Vec<u8>, CryptoError> {
    if password.is_empty() {
        return Err(CryptoError::InvalidPassword);
    }
    if envelope.len() < ENVELOPE_HEADER_LEN {
        return Err(CryptoError::DecryptionFailed(format!(
            "encrypted data too short: {} < {} bytes",
            envelope.len(),
            ENVELOPE_HEADER_LEN
        )));
    }
    if !is_sealed(envelope) {
        return Err(CryptoError::DecryptionFailed(
            "not an encrypted block (envelope magic missing)".into(),
        ));
    }

    let mut salt = [0u8; SALT_LEN];
    let mut nonce = [0u8; NONCE_LEN_16];
    let mut tag = [0u8; TAG_LEN];
    salt.copy_from_slice(&envelope[SALT_OFFSET..NONCE_OFFSET]);
    nonce.copy_from_slice(&envelope[NONCE_OFFSET..TAG_OFFSET]);
    tag.copy_from_slice(&envelope[TAG_OFFSET..LEN_OFFSET]);

    let declared = BigEndian::read_u64(&envelope[LEN_OFFSET..ENVELOPE_HEADER_LEN]);
    let ciphertext = &envelope[ENVELOPE_HEADER_LEN..];
    if declared != ciphertext.len() as u64 {
        return Err(CryptoError::DecryptionFailed(format!(
            "ciphertext size mismatch: declared {} bytes, got {}",
            declared,
            ciphertext.len()
        )));
    }

    let key = derive_key_32(password, &salt)?;
    EnvelopeCipher::new(&key)?.open(&nonce, &tag, ciphertext)
}
