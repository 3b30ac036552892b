//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and platform crypto.
//! Contains use case implementations.

pub mod cancellation;
pub mod config;
pub mod issue_key_pair;
pub mod run_pipeline;
pub mod signature;
pub mod solve_challenge;
