//! PoW (Proof of Work) Module
//!
//! Clean Architecture structure:
//! - `domain/` - Digest logic, entities, value objects, observer traits
//! - `application/` - Use cases (search, key pair, sign, verify, pipeline)
//! - `presentation/` - Console output and JSON report DTOs
//!
//! ## Security Model
//! - Randomness is always passed in explicitly; nothing reads a global RNG
//! - Sign and verify consume PEM text, exactly what a third party would hold
//! - A failed verification is a result, not an error; only malformed keys error

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::cancellation::CancelToken;
pub use application::config::{OutputFormat, PowConfig};
pub use application::run_pipeline::{PipelineOutput, RunPipelineUseCase};
pub use domain::observer::{SearchObserver, SilentObserver};
pub use error::{PowError, PowResult};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
