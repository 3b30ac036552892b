//! Domain Services
//!
//! Pure domain logic for digests and the leading-zero condition.

use platform::crypto::{SHA256_LEN, sha256, to_hex};

use crate::domain::value_objects::Difficulty;

/// SHA-256 digest
pub type Digest = [u8; SHA256_LEN];

/// Compute the digest of a byte sequence
pub fn digest(data: &[u8]) -> Digest {
    sha256(data)
}

/// Render a digest as 64 lowercase hex characters
pub fn digest_hex(digest: &Digest) -> String {
    to_hex(digest)
}

/// Count leading `'0'` hex digits of a digest without rendering it
pub fn count_leading_zero_hex_digits(hash: &Digest) -> u8 {
    let mut count = 0u8;
    for &byte in hash {
        if byte == 0 {
            count += 2;
        } else {
            if byte >> 4 == 0 {
                count += 1;
            }
            break;
        }
    }
    count
}

/// Verify that a digest meets the difficulty requirement
pub fn meets_difficulty(hash: &Digest, difficulty: Difficulty) -> bool {
    count_leading_zero_hex_digits(hash) >= difficulty.zeros()
}
