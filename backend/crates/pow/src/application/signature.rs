//! Sign / Verify Use Cases
//!
//! Both operations take PEM text rather than in-memory keys, so a signature
//! can be checked by anyone holding the published public key block.

use platform::rsa::{parse_private_key_pem, parse_public_key_pem, sign_digest, verify_digest};
use rand::{CryptoRng, RngCore};

use crate::domain::entities::MessageSignature;
use crate::domain::services::{digest, digest_hex};
use crate::error::{KeyRole, PowError, PowResult};

/// Sign the SHA-256 digest of `message` with a PEM-encoded private key
pub fn sign_message<R>(
    rng: &mut R,
    private_key_pem: &str,
    message: &[u8],
) -> PowResult<MessageSignature>
where
    R: CryptoRng + RngCore,
{
    let private_key = parse_private_key_pem(private_key_pem)
        .map_err(|e| PowError::from_rsa(e, KeyRole::Private))?;

    let hash = digest(message);
    let bytes = sign_digest(rng, &private_key, &hash)
        .map_err(|e| PowError::from_rsa(e, KeyRole::Private))?;

    tracing::info!(
        digest = %digest_hex(&hash),
        signature_len = bytes.len(),
        "Signed message"
    );

    Ok(MessageSignature {
        digest: hash,
        bytes,
    })
}

/// Verify `signature` over the SHA-256 digest of `message`
///
/// A malformed public key is an error; any other mismatch is `Ok(false)`.
pub fn verify_message(public_key_pem: &str, message: &[u8], signature: &[u8]) -> PowResult<bool> {
    let public_key = parse_public_key_pem(public_key_pem)
        .map_err(|e| PowError::from_rsa(e, KeyRole::Public))?;

    let hash = digest(message);
    let valid = verify_digest(&public_key, &hash, signature);

    if valid {
        tracing::info!(digest = %digest_hex(&hash), "Signature verified");
    } else {
        tracing::warn!(digest = %digest_hex(&hash), "Signature verification failed");
    }

    Ok(valid)
}
