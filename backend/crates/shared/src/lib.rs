//! Shared Kernel - Crate-crossing minimal core
//!
//! This crate contains the "smallest core" shared by every crate in the workspace:
//! - Common error types, result aliases and exit-code classification
//! - Typed ID wrappers
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all crates.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
