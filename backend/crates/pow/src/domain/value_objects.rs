//! Domain Value Objects
//!
//! Immutable value types for the PoW domain.

use std::fmt;

/// Difficulty level for PoW, in leading zero hex digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Difficulty(u8);

impl Difficulty {
    /// A SHA-256 digest renders as 64 hex digits
    pub const MAX: u8 = 64;

    pub fn new(zeros: u8) -> Option<Self> {
        if zeros <= Self::MAX {
            Some(Self(zeros))
        } else {
            None
        }
    }

    /// Values above [`Difficulty::MAX`] are clamped
    pub const fn clamped(zeros: u8) -> Self {
        if zeros > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(zeros)
        }
    }

    pub fn zeros(&self) -> u8 {
        self.0
    }

    /// Mean number of attempts needed to meet this difficulty (16^zeros)
    pub fn expected_attempts(&self) -> f64 {
        16f64.powi(i32::from(self.0))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Nickname used when none is configured
pub const DEFAULT_NICKNAME: &str = "zwg";

/// Identity string appended to every nonce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nickname(String);

impl Nickname {
    /// Any string is accepted; an empty one leaves bare decimal nonces
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Nickname {
    fn default() -> Self {
        Self(DEFAULT_NICKNAME.to_string())
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
