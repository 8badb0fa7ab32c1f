use std::fmt;

use thiserror::Error;

use crate::{crypto::CryptoError, headers::HeaderError};

/// Unified codec error covering every failure a carrier operation can report.
/// - Each variant carries a human-readable reason.
/// - `From<T>` impls enable `?` across the header, crypto and carrier layers.
/// - Nothing in the codec layer swallows or downgrades these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Magic bytes absent or wrong: the input is not this codec's format.
    #[error("format mismatch: {0}")]
    FormatMismatch(String),

    /// Magic recognised, version unknown to this build.
    #[error("unsupported version: {0}")]
    UnsupportedVersion(String),

    /// A declared length exceeds the bytes actually available.
    #[error("truncated: {0}")]
    Truncated(String),

    /// Checksum mismatch, or structure damaged after a successful locate.
    #[error("corrupted: {0}")]
    Corrupted(String),

    /// Trailing end-of-block marker absent.
    #[error("not encoded: {0}")]
    NotEncoded(String),

    /// Password missing or empty where one is structurally required.
    #[error("invalid password: {0}")]
    InvalidPassword(String),

    /// AEAD authentication failure (wrong password or tampering).
    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    /// Unexpected failure that is not the caller's fault.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Discriminant of [`CodecError`] without the reason string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    FormatMismatch,
    UnsupportedVersion,
    Truncated,
    Corrupted,
    NotEncoded,
    InvalidPassword,
    DecryptionFailed,
    Internal,
}

impl ErrorKind {
    /// True when the failure is caused by the input rather than by this crate.
    pub fn is_client_error(self) -> bool {
        !matches!(self, ErrorKind::Internal)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::FormatMismatch     => "format_mismatch",
            ErrorKind::UnsupportedVersion => "unsupported_version",
            ErrorKind::Truncated          => "truncated",
            ErrorKind::Corrupted          => "corrupted",
            ErrorKind::NotEncoded         => "not_encoded",
            ErrorKind::InvalidPassword    => "invalid_password",
            ErrorKind::DecryptionFailed   => "decryption_failed",
            ErrorKind::Internal           => "internal",
        };
        f.write_str(name)
    }
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::FormatMismatch(_)     => ErrorKind::FormatMismatch,
            CodecError::UnsupportedVersion(_) => ErrorKind::UnsupportedVersion,
            CodecError::Truncated(_)          => ErrorKind::Truncated,
            CodecError::Corrupted(_)          => ErrorKind::Corrupted,
            CodecError::NotEncoded(_)         => ErrorKind::NotEncoded,
            CodecError::InvalidPassword(_)    => ErrorKind::InvalidPassword,
            CodecError::DecryptionFailed(_)   => ErrorKind::DecryptionFailed,
            CodecError::Internal(_)           => ErrorKind::Internal,
        }
    }

    /// The reason string without the kind prefix.
    pub fn reason(&self) -> &str {
        match self {
            CodecError::FormatMismatch(msg)
            | CodecError::UnsupportedVersion(msg)
            | CodecError::Truncated(msg)
            | CodecError::Corrupted(msg)
            | CodecError::NotEncoded(msg)
            | CodecError::InvalidPassword(msg)
            | CodecError::DecryptionFailed(msg)
            | CodecError::Internal(msg) => msg,
        }
    }
}

impl From<HeaderError> for CodecError {
    fn from(e: HeaderError) -> Self {
        let msg = e.to_string();
        match e {
            HeaderError::BufferTooShort { .. } | HeaderError::InvalidMagic { .. } => {
                CodecError::FormatMismatch(msg)
            }
            HeaderError::UnsupportedVersion { .. } => CodecError::UnsupportedVersion(msg),
            HeaderError::FilenameTruncated { .. } | HeaderError::PayloadTruncated { .. } => {
                CodecError::Truncated(msg)
            }
            HeaderError::ChecksumMismatch { .. } => CodecError::Corrupted(msg),
        }
    }
}

impl From<CryptoError> for CodecError {
    fn from(e: CryptoError) -> Self {
        let msg = e.to_string();
        match e {
            CryptoError::InvalidPassword | CryptoError::PasswordRequired => {
                CodecError::InvalidPassword(msg)
            }
            CryptoError::Truncated { .. } => CodecError::Truncated(msg),
            CryptoError::DecryptionFailed(_) => CodecError::DecryptionFailed(msg),
            CryptoError::Failure(_) => CodecError::Internal(msg),
        }
    }
}

/// Convenience alias used across the crate.
pub type CodecResult<T> = Result<T, CodecError>;
