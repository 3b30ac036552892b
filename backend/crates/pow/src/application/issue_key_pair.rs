//! Issue Key Pair Use Case

use std::time::Instant;

use platform::rsa::{RsaKeyPair, generate_key_pair};
use rand::{CryptoRng, RngCore};

use crate::error::{KeyRole, PowError, PowResult};

/// Generate a fresh RSA key pair of `bits` bits from `rng`
pub fn issue_key_pair<R>(rng: &mut R, bits: usize) -> PowResult<RsaKeyPair>
where
    R: CryptoRng + RngCore,
{
    let started = Instant::now();
    let key_pair =
        generate_key_pair(rng, bits).map_err(|e| PowError::from_rsa(e, KeyRole::Private))?;

    tracing::info!(
        bits = key_pair.bits(),
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "Generated RSA key pair"
    );

    Ok(key_pair)
}
