mod draw;
mod progress;
mod service;
mod session;

// Public API of the race subsystem.
pub use crate::error::RaceError;
pub use draw::draw_challenge;
pub use progress::RaceProgress;
pub use service::{RaceOutcome, RaceService};
pub use session::{AnswerVerdict, RaceSession};
