//! Domain Entities
//!
//! Core business entities for the PoW domain.

use std::time::Duration;

use crate::domain::services::{Digest, digest_hex};
use crate::domain::value_objects::{Difficulty, Nickname};

/// Candidate message - decimal nonce immediately followed by the nickname
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMessage {
    nonce: u64,
    text: String,
}

impl CandidateMessage {
    pub fn new(nonce: u64, nickname: &Nickname) -> Self {
        Self {
            nonce,
            text: format!("{}{}", nonce, nickname),
        }
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

/// PowSolution entity - the first candidate that met a difficulty
#[derive(Debug, Clone)]
pub struct PowSolution {
    pub difficulty: Difficulty,
    pub message: CandidateMessage,
    pub digest: Digest,
    pub elapsed: Duration,
}

impl PowSolution {
    pub fn new(
        difficulty: Difficulty,
        message: CandidateMessage,
        digest: Digest,
        elapsed: Duration,
    ) -> Self {
        Self {
            difficulty,
            message,
            digest,
            elapsed,
        }
    }

    /// Nonces start at 0, so every nonce up to and including this one was tried
    pub fn attempts(&self) -> u64 {
        self.message.nonce().saturating_add(1)
    }

    pub fn digest_hex(&self) -> String {
        digest_hex(&self.digest)
    }
}

/// MessageSignature entity - a signature bound to the digest it was made over
#[derive(Debug, Clone)]
pub struct MessageSignature {
    pub digest: Digest,
    pub bytes: Vec<u8>,
}

impl MessageSignature {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
