//! Shared error types for the services crate.

use thiserror::Error;

use racer_core::model::{ScorecardError, Tier};

/// Errors emitted by the race engine.
///
/// All of these are recoverable by the caller: report, re-prompt, or start
/// a fresh race. `InvalidAnswer` and `Completed` are guaranteed to leave
/// the session untouched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RaceError {
    #[error("no challenges available for tier '{0}'")]
    EmptyTier(Tier),

    #[error("challenge has no questions")]
    Empty,

    #[error("race already finished")]
    Completed,

    #[error("'{raw}' is not a line number")]
    InvalidAnswer { raw: String },

    #[error(transparent)]
    Scorecard(#[from] ScorecardError),
}
