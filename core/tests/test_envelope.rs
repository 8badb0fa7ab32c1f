// Encryption envelope: key derivation, layout, authentication failures.
// Each seal/open runs 100k PBKDF2 rounds, so property cases are kept few.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use soundpixel_core::{
        constants::MAGIC_ENVELOPE,
        crypto::{
            derive_key_32, is_sealed, open, require_password, seal, sealed_extent, CryptoError,
            ENVELOPE_HEADER_LEN,
        },
        types::{CodecError, ErrorKind},
    };

    #[test]
    fn key_changes_with_salt() {
        let k1 = derive_key_32("hunter2", &[1; 16]).unwrap();
        let k2 = derive_key_32("hunter2", &[2; 16]).unwrap();
        assert_ne!(*k1, *k2);
    }

    #[test]
    fn key_is_deterministic() {
        let k1 = derive_key_32("hunter2", &[9; 16]).unwrap();
        let k2 = derive_key_32("hunter2", &[9; 16]).unwrap();
        assert_eq!(*k1, *k2);
    }

    #[test]
    fn key_changes_with_password() {
        let k1 = derive_key_32("a", &[0; 16]).unwrap();
        let k2 = derive_key_32("b", &[0; 16]).unwrap();
        assert_ne!(*k1, *k2);
    }

    #[test]
    fn empty_password_rejected() {
        assert_eq!(derive_key_32("", &[0; 16]).unwrap_err(), CryptoError::InvalidPassword);
        assert_eq!(seal(b"x", "").unwrap_err(), CryptoError::InvalidPassword);
        assert_eq!(
            CodecError::from(CryptoError::InvalidPassword).kind(),
            ErrorKind::InvalidPassword
        );
    }

    #[test]
    fn password_required_for_sealed_data() {
        assert_eq!(require_password(None).unwrap_err(), CryptoError::PasswordRequired);
        assert_eq!(require_password(Some("")).unwrap_err(), CryptoError::PasswordRequired);
        assert_eq!(require_password(Some("pw")).unwrap(), "pw");
    }

    #[test]
    fn envelope_layout() {
        let env = seal(b"hello world", "pw").unwrap();
        assert!(is_sealed(&env));
        assert_eq!(&env[..8], &MAGIC_ENVELOPE);
        assert_eq!(env.len(), ENVELOPE_HEADER_LEN + 11);
        assert_eq!(&env[56..64], &11u64.to_be_bytes());
        assert_eq!(sealed_extent(&env).unwrap(), env.len());
    }

    #[test]
    fn fresh_salt_and_nonce_per_seal() {
        let a = seal(b"same", "pw").unwrap();
        let b = seal(b"same", "pw").unwrap();
        assert_ne!(a[8..40], b[8..40]);
        assert_ne!(a, b);
    }

    #[test]
    fn roundtrip() {
        let env = seal(b"secret payload", "correct horse").unwrap();
        assert_eq!(open(&env, "correct horse").unwrap(), b"secret payload");
    }

    #[test]
    fn empty_plaintext_roundtrip() {
        let env = seal(b"", "pw").unwrap();
        assert_eq!(env.len(), ENVELOPE_HEADER_LEN);
        assert!(open(&env, "pw").unwrap().is_empty());
    }

    #[test]
    fn wrong_password_fails() {
        let env = seal(b"secret", "right").unwrap();
        let err = open(&env, "wrong").unwrap_err();
        assert!(matches!(err, CryptoError::DecryptionFailed(_)));
        assert_eq!(CodecError::from(err).kind(), ErrorKind::DecryptionFailed);
    }

    #[test]
    fn tampered_fields_fail() {
        let env = seal(b"secret data", "pw").unwrap();
        // salt, nonce, tag, ciphertext
        for idx in [8, 24, 40, ENVELOPE_HEADER_LEN + 3] {
            let mut bad = env.clone();
            bad[idx] ^= 0x80;
            assert!(
                matches!(open(&bad, "pw"), Err(CryptoError::DecryptionFailed(_))),
                "byte {idx}"
            );
        }
    }

    #[test]
    fn length_mismatch_fails() {
        let env = seal(b"secret data", "pw").unwrap();
        let mut padded = env.clone();
        padded.extend_from_slice(&[0; 4]);
        assert!(matches!(open(&padded, "pw"), Err(CryptoError::DecryptionFailed(_))));
        assert!(matches!(open(&env[..env.len() - 1], "pw"), Err(CryptoError::DecryptionFailed(_))));
    }

    #[test]
    fn short_or_foreign_input_fails() {
        assert!(matches!(open(&[0u8; 10], "pw"), Err(CryptoError::DecryptionFailed(_))));
        assert!(matches!(open(&[0u8; 80], "pw"), Err(CryptoError::DecryptionFailed(_))));
        assert!(matches!(sealed_extent(&[0u8; 80]), Err(CryptoError::DecryptionFailed(_))));
    }

    #[test]
    fn extent_cuts_padding() {
        let env = seal(b"abc", "pw").unwrap();
        let mut padded = env.clone();
        padded.extend_from_slice(&[0; 17]);
        let extent = sealed_extent(&padded).unwrap();
        assert_eq!(extent, env.len());
        assert_eq!(open(&padded[..extent], "pw").unwrap(), b"abc");
    }

    #[test]
    fn extent_reports_truncation() {
        let env = seal(&[5u8; 40], "pw").unwrap();
        let err = sealed_extent(&env[..env.len() - 10]).unwrap_err();
        assert_eq!(err, CryptoError::Truncated { declared: 40, available: 30 });
        assert_eq!(CodecError::from(err).kind(), ErrorKind::Truncated);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(6))]

        #[test]
        fn prop_seal_open_roundtrip(
            data in prop::collection::vec(any::<u8>(), 0..512),
            password in "[a-zA-Z0-9]{1,24}",
        ) {
            let env = seal(&data, &password).unwrap();
            prop_assert_eq!(open(&env, &password).unwrap(), data);
        }

        #[test]
        fn prop_other_password_fails(
            data in prop::collection::vec(any::<u8>(), 1..256),
            password in "[a-z]{1,12}",
        ) {
            let env = seal(&data, &password).unwrap();
            let other = format!("{password}!");
            prop_assert!(matches!(open(&env, &other), Err(CryptoError::DecryptionFailed(_))));
        }
    }
}
