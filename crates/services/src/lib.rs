#![forbid(unsafe_code)]

pub mod error;
pub mod race;

pub use racer_core::Clock;

pub use error::RaceError;
pub use race::{AnswerVerdict, RaceOutcome, RaceProgress, RaceService, RaceSession};
