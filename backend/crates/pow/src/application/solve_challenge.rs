//! Solve Challenge Use Case
//!
//! Sequential nonce search: `decimal(nonce) ++ nickname` is hashed for
//! nonce = 0, 1, 2, ... until the digest has enough leading zero hex digits.

use std::sync::Arc;
use std::time::Instant;

use crate::application::cancellation::CancelToken;
use crate::application::config::PowConfig;
use crate::domain::entities::{CandidateMessage, PowSolution};
use crate::domain::observer::SearchObserver;
use crate::domain::services::{digest, meets_difficulty};
use crate::domain::value_objects::Difficulty;
use crate::error::{PowError, PowResult};

/// Solve Challenge Use Case
pub struct SolveChallengeUseCase<O>
where
    O: SearchObserver + ?Sized,
{
    observer: Arc<O>,
    config: Arc<PowConfig>,
    cancel: CancelToken,
}

impl<O> SolveChallengeUseCase<O>
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

    /// Search until a candidate meets `difficulty`
    ///
    /// Without a configured attempt cap this only returns early when the
    /// cancellation token is tripped.
    pub fn execute(&self, difficulty: Difficulty) -> PowResult<PowSolution> {
        let nickname = &self.config.nickname;
        let interval = self.config.progress_interval.max(1);

        tracing::info!(
            difficulty = difficulty.zeros(),
            expected_attempts = difficulty.expected_attempts(),
            "Starting PoW search"
        );
        self.observer.on_start(difficulty);

        let started = Instant::now();
        let mut nonce: u64 = 0;
        loop {
            if self.cancel.is_cancelled() {
                return Err(PowError::SearchCancelled {
                    difficulty: difficulty.zeros(),
                    attempts: nonce,
                });
            }

            let message = CandidateMessage::new(nonce, nickname);
            let hash = digest(message.as_bytes());

            if meets_difficulty(&hash, difficulty) {
                let solution = PowSolution::new(difficulty, message, hash, started.elapsed());

                tracing::info!(
                    difficulty = difficulty.zeros(),
                    nonce = solution.message.nonce(),
                    attempts = solution.attempts(),
                    elapsed_ms = solution.elapsed.as_secs_f64() * 1000.0,
                    "PoW solution found"
                );
                self.observer.on_found(&solution);
                return Ok(solution);
            }

            nonce = nonce
                .checked_add(1)
                .filter(|&next| self.config.max_attempts.is_none_or(|max| next < max))
                .ok_or(PowError::SearchExhausted {
                    difficulty: difficulty.zeros(),
                    attempts: nonce.saturating_add(1),
                })?;

            if nonce % interval == 0 {
                tracing::debug!(difficulty = difficulty.zeros(), attempts = nonce, "PoW progress");
                self.observer.on_progress(difficulty, nonce);
            }
        }
    }
}
