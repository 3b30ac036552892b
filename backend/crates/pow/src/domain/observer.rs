//! Observer Traits
//!
//! Interfaces for reporting search progress. Implementations live in the presentation layer.

use crate::domain::entities::PowSolution;
use crate::domain::value_objects::Difficulty;

/// Search observer trait
///
/// Called synchronously from the search loop, so implementations should be cheap.
pub trait SearchObserver: Send + Sync {
    /// A search for `difficulty` is starting
    fn on_start(&self, _difficulty: Difficulty) {}

    /// `attempts` candidates have been tried without a match
    fn on_progress(&self, difficulty: Difficulty, attempts: u64);

    /// A matching candidate was found
    fn on_found(&self, _solution: &PowSolution) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl SearchObserver for SilentObserver {
    fn on_progress(&self, _difficulty: Difficulty, _attempts: u64) {}
}
