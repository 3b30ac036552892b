//! Run Pipeline Use Case
//!
//! Search at every configured difficulty, generate a key pair, sign the
//! message of the configured signing difficulty, then verify it with the
//! public key PEM. Strictly sequential; the first error aborts the run.

use std::sync::Arc;

use kernel::id::RunId;
use platform::rsa::RsaKeyPair;
use rand::{CryptoRng, RngCore};

use crate::application::cancellation::CancelToken;
use crate::application::config::PowConfig;
use crate::application::issue_key_pair::issue_key_pair;
use crate::application::signature::{sign_message, verify_message};
use crate::application::solve_challenge::SolveChallengeUseCase;
use crate::domain::entities::{MessageSignature, PowSolution};
use crate::domain::observer::SearchObserver;
use crate::error::{PowError, PowResult};

/// Output DTO for a pipeline run
#[derive(Debug)]
pub struct PipelineOutput {
    pub run_id: RunId,
    /// One solution per configured difficulty, in search order
    pub solutions: Vec<PowSolution>,
    /// Index into `solutions` of the signed solution
    pub signed_index: usize,
    pub key_pair: RsaKeyPair,
    pub signature: MessageSignature,
    pub verified: bool,
}

impl PipelineOutput {
    pub fn signed_solution(&self) -> &PowSolution {
        &self.solutions[self.signed_index]
    }
}

/// Run Pipeline Use Case
pub struct RunPipelineUseCase<O>
where
    O: SearchObserver + ?Sized,
{
    observer: Arc<O>,
    config: Arc<PowConfig>,
    cancel: CancelToken,
}

impl<O> RunPipelineUseCase<O>
where
    O: SearchObserver + ?Sized,
{
    pub fn new(observer: Arc<O>, config: Arc<PowConfig>, cancel: CancelToken) -> Self {
        Self {
            observer,
            config,
            cancel,
        }
    }

    pub fn execute<R>(&self, rng: &mut R) -> PowResult<PipelineOutput>
    where
        R: CryptoRng + RngCore,
    {
        let run_id = RunId::new();
        let span = tracing::info_span!("pipeline", run_id = %run_id);
        let _guard = span.enter();

        self.run(run_id, rng).inspect_err(PowError::log)
    }

    fn run<R>(&self, run_id: RunId, rng: &mut R) -> PowResult<PipelineOutput>
    where
        R: CryptoRng + RngCore,
    {
        self.config.validate()?;

        let solver = SolveChallengeUseCase::new(
            self.observer.clone(),
            self.config.clone(),
            self.cancel.clone(),
        );
        let solutions = self
            .config
            .difficulties
            .iter()
            .map(|&difficulty| solver.execute(difficulty))
            .collect::<PowResult<Vec<_>>>()?;

        let signed_index = solutions
            .iter()
            .position(|s| s.difficulty == self.config.signing_difficulty)
            .ok_or_else(|| {
                PowError::InvalidConfig(format!(
                    "no solution for signing difficulty {}",
                    self.config.signing_difficulty
                ))
            })?;
        let message = solutions[signed_index].message.as_bytes();

        let key_pair = issue_key_pair(rng, self.config.rsa_bits)?;
        let signature = sign_message(rng, key_pair.private_pem(), message)?;
        let verified = verify_message(key_pair.public_pem(), message, &signature.bytes)?;

        tracing::info!(
            signed_difficulty = self.config.signing_difficulty.zeros(),
            verified,
            "PoW pipeline completed"
        );

        Ok(PipelineOutput {
            run_id,
            solutions,
            signed_index,
            key_pair,
            signature,
            verified,
        })
    }
}
