mod bank;
mod challenge;
mod scorecard;
mod settings;
mod tier;

pub use bank::QuestionBank;
pub use challenge::{Challenge, ChallengeError, Question};
pub use scorecard::{Rank, Scorecard, ScorecardError};
pub use settings::{RaceSettings, SettingsError};
pub use tier::{Tier, TierParseError};
