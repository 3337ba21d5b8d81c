use thiserror::Error;

use crate::model::{ChallengeError, ScorecardError, SettingsError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Challenge(#[from] ChallengeError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Scorecard(#[from] ScorecardError),
}
