//! PoW Error Types
//!
//! This module provides PoW-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use std::fmt;

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::rsa::{MAX_KEY_BITS, MIN_KEY_BITS, RsaError};
use thiserror::Error;

/// PoW-specific result type alias
pub type PowResult<T> = Result<T, PowError>;

/// Which half of a key pair failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    Private,
    Public,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRole::Private => f.write_str("private"),
            KeyRole::Public => f.write_str("public"),
        }
    }
}

/// PoW-specific error variants
///
/// Every variant belongs to exactly one pipeline stage and converts to
/// `AppError` for exit-code handling.
#[derive(Debug, Error)]
pub enum PowError {
    /// Configuration value missing or out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Search stopped by the cancellation token
    #[error("Search for {difficulty} leading zeros cancelled after {attempts} attempts")]
    SearchCancelled { difficulty: u8, attempts: u64 },

    /// Search hit the attempt cap without a match
    #[error("Search for {difficulty} leading zeros found no match in {attempts} attempts")]
    SearchExhausted { difficulty: u8, attempts: u64 },

    /// Random source failed during key generation
    #[error("Key generation: random source exhausted: {0}")]
    RandomSourceExhausted(String),

    /// Requested RSA modulus size is not supported
    #[error("Key generation: unsupported key size of {bits} bits")]
    UnsupportedKeySize { bits: usize },

    /// RSA primitive failed to produce or encode a key
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// Key text could not be parsed
    #[error("Malformed {role} key: {reason}")]
    KeyParse { role: KeyRole, reason: String },

    /// RSA primitive rejected the private key or digest
    #[error("Signing failed: {0}")]
    Signing(String),
}

impl PowError {
    /// Map an RSA error, naming which key was being handled
    pub(crate) fn from_rsa(err: RsaError, role: KeyRole) -> Self {
        match err {
            RsaError::UnsupportedKeySize { bits } => PowError::UnsupportedKeySize { bits },
            RsaError::RandomSourceExhausted(msg) => PowError::RandomSourceExhausted(msg),
            RsaError::KeyGeneration(msg) | RsaError::KeyEncoding(msg) => {
                PowError::KeyGeneration(msg)
            }
            RsaError::KeyParse(reason) => PowError::KeyParse { role, reason },
            RsaError::Signing(msg) => PowError::Signing(msg),
        }
    }

    /// Get the ErrorKind (pipeline stage) for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PowError::InvalidConfig(_) => ErrorKind::Configuration,
            PowError::SearchCancelled { .. } | PowError::SearchExhausted { .. } => {
                ErrorKind::Search
            }
            PowError::RandomSourceExhausted(_)
            | PowError::UnsupportedKeySize { .. }
            | PowError::KeyGeneration(_) => ErrorKind::KeyGeneration,
            PowError::KeyParse {
                role: KeyRole::Private,
                ..
            }
            | PowError::Signing(_) => ErrorKind::Signing,
            PowError::KeyParse {
                role: KeyRole::Public,
                ..
            } => ErrorKind::Verification,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            PowError::SearchCancelled {
                difficulty,
                attempts,
            } => {
                tracing::warn!(difficulty, attempts, "PoW search cancelled");
            }
            PowError::InvalidConfig(msg) => {
                tracing::warn!(message = %msg, "PoW configuration rejected");
            }
            _ => {
                tracing::error!(stage = %self.kind(), error = %self, "PoW pipeline failed");
            }
        }
    }

    fn action(&self) -> Option<String> {
        match self {
            PowError::InvalidConfig(_) => Some("Check the POW_* environment variables".to_string()),
            PowError::UnsupportedKeySize { .. } => Some(format!(
                "Set POW_RSA_BITS to a multiple of 8 between {} and {}",
                MIN_KEY_BITS, MAX_KEY_BITS
            )),
            PowError::SearchExhausted { .. } => {
                Some("Raise POW_MAX_ATTEMPTS or lower the difficulty".to_string())
            }
            _ => None,
        }
    }
}

impl From<PowError> for AppError {
    fn from(err: PowError) -> Self {
        let kind = err.kind();
        let action = err.action();
        let app_err = AppError::new(kind, err.to_string());
        let app_err = match action {
            Some(action) => app_err.with_action(action),
            None => app_err,
        };
        app_err.with_source(err)
    }
}
