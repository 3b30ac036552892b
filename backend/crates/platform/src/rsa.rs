//! RSA Key Management and Signatures
//!
//! RSASSA-PKCS1-v1_5 over SHA-256 digests with:
//! - Key pair generation from a caller-supplied CSPRNG
//! - PEM serialization (PKCS#8 `PRIVATE KEY`, SPKI `PUBLIC KEY`)
//! - PEM parsing with PKCS#1 (`RSA PRIVATE KEY` / `RSA PUBLIC KEY`) fallback
//!
//! ## Security
//! - The private key PEM is held in a zeroizing buffer
//! - Debug output of key pairs is redacted
//! - Signing uses blinding; the signature itself is deterministic

use std::fmt;

use rand::{CryptoRng, RngCore};
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::crypto::SHA256_LEN;

// ============================================================================
// Constants
// ============================================================================

/// Smallest accepted modulus size in bits
pub const MIN_KEY_BITS: usize = 1024;

/// Largest accepted modulus size in bits
pub const MAX_KEY_BITS: usize = 4096;

/// Default modulus size in bits
pub const DEFAULT_KEY_BITS: usize = 2048;

// ============================================================================
// Error Types
// ============================================================================

/// RSA key and signature errors
#[derive(Debug, Error)]
pub enum RsaError {
    /// Requested modulus size is outside the supported range
    #[error(
        "Unsupported RSA key size: {bits} bits (supported: {min}..={max}, multiple of 8)",
        min = MIN_KEY_BITS,
        max = MAX_KEY_BITS
    )]
    UnsupportedKeySize { bits: usize },

    /// The random source could not produce bytes
    #[error("Random source exhausted: {0}")]
    RandomSourceExhausted(String),

    /// The RSA primitive failed to produce a key
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// A key could not be encoded as PEM
    #[error("Key encoding failed: {0}")]
    KeyEncoding(String),

    /// PEM text could not be parsed into a key
    #[error("Key parse failed: {0}")]
    KeyParse(String),

    /// The RSA primitive rejected the key or digest
    #[error("Signing failed: {0}")]
    Signing(String),
}

// ============================================================================
// Key Pair
// ============================================================================

/// RSA key pair with its PEM serializations
///
/// Both PEM forms are produced once at construction and stay in sync with
/// the in-memory keys.
pub struct RsaKeyPair {
    private_key: RsaPrivateKey,
    public_key: RsaPublicKey,
    private_pem: Zeroizing<String>,
    public_pem: String,
}

impl RsaKeyPair {
    /// Build a key pair (and its PEM text) from a private key
    pub fn from_private_key(private_key: RsaPrivateKey) -> Result<Self, RsaError> {
        let public_key = private_key.to_public_key();
        let private_pem = private_key
            .to_pkcs8_pem(LineEnding::LF)
            .map_err(|e| RsaError::KeyEncoding(e.to_string()))?;
        let public_pem = public_key
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| RsaError::KeyEncoding(e.to_string()))?;

        Ok(Self {
            private_key,
            public_key,
            private_pem,
            public_pem,
        })
    }

    /// Rebuild a key pair from private key PEM text
    pub fn from_private_pem(pem: &str) -> Result<Self, RsaError> {
        Self::from_private_key(parse_private_key_pem(pem)?)
    }

    pub fn private_key(&self) -> &RsaPrivateKey {
        &self.private_key
    }

    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public_key
    }

    /// PKCS#8 `PRIVATE KEY` PEM block
    pub fn private_pem(&self) -> &str {
        &self.private_pem
    }

    /// SPKI `PUBLIC KEY` PEM block
    pub fn public_pem(&self) -> &str {
        &self.public_pem
    }

    /// Modulus size in bits
    pub fn bits(&self) -> usize {
        self.public_key.size() * 8
    }
}

impl fmt::Debug for RsaKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaKeyPair")
            .field("bits", &self.bits())
            .field("private_key", &"[REDACTED]")
            .field("public_pem", &self.public_pem)
            .finish()
    }
}

// ============================================================================
// Key Generation
// ============================================================================

/// Check that a modulus size is supported
pub fn validate_key_bits(bits: usize) -> Result<(), RsaError> {
    if (MIN_KEY_BITS..=MAX_KEY_BITS).contains(&bits) && bits % 8 == 0 {
        Ok(())
    } else {
        Err(RsaError::UnsupportedKeySize { bits })
    }
}

/// Draw a few bytes through the fallible API
///
/// The rsa crate calls the infallible `RngCore` methods, which panic on a
/// broken source.
fn probe_random_source<R: RngCore>(rng: &mut R) -> Result<(), String> {
    let mut probe = Zeroizing::new([0u8; 32]);
    rng.try_fill_bytes(&mut probe[..]).map_err(|e| e.to_string())
}

/// Generate a new RSA key pair
///
/// The size is validated before the random source is touched. The source is
/// then probed once so that a failing RNG surfaces as
/// [`RsaError::RandomSourceExhausted`] instead of a panic inside key generation.
pub fn generate_key_pair<R>(rng: &mut R, bits: usize) -> Result<RsaKeyPair, RsaError>
where
    R: CryptoRng + RngCore,
{
    validate_key_bits(bits)?;
    probe_random_source(rng).map_err(RsaError::RandomSourceExhausted)?;

    let private_key =
        RsaPrivateKey::new(rng, bits).map_err(|e| RsaError::KeyGeneration(e.to_string()))?;

    RsaKeyPair::from_private_key(private_key)
}

// ============================================================================
// PEM Parsing
// ============================================================================

/// Parse a private key from PKCS#8 PEM, falling back to PKCS#1
pub fn parse_private_key_pem(pem: &str) -> Result<RsaPrivateKey, RsaError> {
    let pem = pem.trim();
    RsaPrivateKey::from_pkcs8_pem(pem).or_else(|pkcs8_err| {
        RsaPrivateKey::from_pkcs1_pem(pem).map_err(|_| RsaError::KeyParse(pkcs8_err.to_string()))
    })
}

/// Parse a public key from SPKI PEM, falling back to PKCS#1
pub fn parse_public_key_pem(pem: &str) -> Result<RsaPublicKey, RsaError> {
    let pem = pem.trim();
    RsaPublicKey::from_public_key_pem(pem).or_else(|spki_err| {
        RsaPublicKey::from_pkcs1_pem(pem).map_err(|_| RsaError::KeyParse(spki_err.to_string()))
    })
}

// ============================================================================
// Sign / Verify
// ============================================================================

/// Sign a SHA-256 digest with RSASSA-PKCS1-v1_5
///
/// The rng only drives blinding; equal inputs give equal signatures.
/// A failing rng is reported as [`RsaError::Signing`].
pub fn sign_digest<R>(
    rng: &mut R,
    private_key: &RsaPrivateKey,
    digest: &[u8; SHA256_LEN],
) -> Result<Vec<u8>, RsaError>
where
    R: CryptoRng + RngCore,
{
    probe_random_source(rng)
        .map_err(|e| RsaError::Signing(format!("random source exhausted: {e}")))?;

    private_key
        .sign_with_rng(rng, Pkcs1v15Sign::new::<Sha256>(), digest)
        .map_err(|e| RsaError::Signing(e.to_string()))
}

/// Verify an RSASSA-PKCS1-v1_5 signature over a SHA-256 digest
///
/// Any mismatch (wrong key, digest, signature bytes or length) is `false`.
pub fn verify_digest(public_key: &RsaPublicKey, digest: &[u8; SHA256_LEN], signature: &[u8]) -> bool {
    public_key
        .verify(Pkcs1v15Sign::new::<Sha256>(), digest, signature)
        .is_ok()
}
