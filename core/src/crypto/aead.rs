//! src/crypto/aead.rs
//! AEAD interface for the envelope: AES-256-GCM with a 16-byte nonce.
//!
//! Design notes:
//! - 32-byte key from the KDF, 16-byte random nonce per envelope, 16-byte tag.
//! - No associated data is bound.
//! - Tag is carried detached from the ciphertext, matching the envelope layout.
//! - Tag verification is constant-time and fails closed (no partial plaintext).

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::aes::Aes256;
use aes_gcm::{AesGcm, Nonce, Tag};

use crate::crypto::types::{CryptoError, KEY_LEN_32, NONCE_LEN_16, TAG_LEN};

/// AES-256-GCM parameterised for 16-byte nonces.
pub type Aes256Gcm16 = AesGcm<Aes256, U16>;

pub struct EnvelopeCipher {
    cipher: Aes256Gcm16,
}

impl EnvelopeCipher {
    /// Construct the cipher from a derived key.
    pub fn new(key: &[u8; KEY_LEN_32]) -> Result<Self, CryptoError> {
        let cipher = Aes256Gcm16::new_from_slice(key)
            .map_err(|_| CryptoError::Failure("invalid AES-256 key length".into()))?;
        Ok(Self { cipher })
    }

    /// Encrypt `plaintext`; returns `(ciphertext, tag)`.
    pub fn seal(
        &self,
        nonce: &[u8; NONCE_LEN_16],
        plaintext: &[u8],
    ) -> Result<(Vec<u8>, [u8; TAG_LEN]), CryptoError> {
        let mut buffer = plaintext.to_vec();
        let tag = self
            .cipher
            .encrypt_in_place_detached(Nonce::<U16>::from_slice(nonce), &[], &mut buffer)
            .map_err(|_| CryptoError::Failure("AES-GCM seal failed".into()))?;

        let mut tag_bytes = [0u8; TAG_LEN];
        tag_bytes.copy_from_slice(tag.as_slice());
        Ok((buffer, tag_bytes))
    }

    /// Decrypt and verify `ciphertext` against `tag`.
    pub fn open(
        &self,
        nonce: &[u8; NONCE_LEN_16],
        tag: &[u8; TAG_LEN],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let mut buffer = ciphertext.to_vec();
        self.cipher
            .decrypt_in_place_detached(
                Nonce::<U16>::from_slice(nonce),
                &[],
                &mut buffer,
                Tag::<U16>::from_slice(tag),
            )
            .map_err(|_| {
                CryptoError::DecryptionFailed(
                    "wrong password or data has been tampered with".into(),
                )
            })?;
        Ok(buffer)
    }
}
