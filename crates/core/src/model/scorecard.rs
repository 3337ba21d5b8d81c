use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::{RaceSettings, Tier};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScorecardError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("score ({score}) exceeds question count ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },

    #[error("cannot score a race with no questions")]
    NoQuestions,
}

//
// ─── RANK ─────────────────────────────────────────────────────────────────────
//

/// Letter grade derived from the blended final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    S,
    A,
    B,
    C,
    D,
}

impl Rank {
    /// Maps a 0-100 final score onto the fixed rank thresholds.
    #[must_use]
    pub fn from_score(final_score: u32) -> Self {
        match final_score {
            90.. => Rank::S,
            80..=89 => Rank::A,
            70..=79 => Rank::B,
            60..=69 => Rank::C,
            _ => Rank::D,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Rank::S => "S",
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
            Rank::D => "D",
        };
        f.write_str(letter)
    }
}

//
// ─── SCORECARD ────────────────────────────────────────────────────────────────
//

/// Final result bundle for one race: raw points, elapsed time, and the
/// accuracy/speed blend with its rank.
///
/// A pure function of the race endpoints and the rule table, so computing
/// it again from an unchanged session yields the same values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    tier: Tier,
    score: u32,
    total_questions: u32,
    elapsed_seconds: i64,
    accuracy: u32,
    speed: u32,
    final_score: u32,
    rank: Rank,
}

impl Scorecard {
    /// Computes the scorecard for a finished race.
    ///
    /// Accuracy is the rounded percent of questions credited. Speed is 100
    /// when the race finished within the tier's target, otherwise it drops
    /// by the overtime penalty for every whole second over target, floored
    /// at zero. The final score blends the two by the table's weights,
    /// truncated to an integer.
    ///
    /// # Errors
    ///
    /// Returns `ScorecardError::InvalidTimeRange` if `completed_at` is
    /// before `started_at`, `ScorecardError::NoQuestions` for a zero
    /// question count, and `ScorecardError::ScoreExceedsTotal` if more
    /// points were credited than questions exist.
    pub fn compute(
        tier: Tier,
        score: u32,
        total_questions: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        settings: &RaceSettings,
    ) -> Result<Self, ScorecardError> {
        if completed_at < started_at {
            return Err(ScorecardError::InvalidTimeRange);
        }
        if total_questions == 0 {
            return Err(ScorecardError::NoQuestions);
        }
        if score > total_questions {
            return Err(ScorecardError::ScoreExceedsTotal {
                score,
                total: total_questions,
            });
        }

        let elapsed_seconds = (completed_at - started_at).num_seconds();
        let accuracy = percent_rounded(score, total_questions);
        let speed = speed_score(
            elapsed_seconds,
            i64::from(settings.target_secs(tier)),
            i64::from(settings.overtime_penalty_per_sec()),
        );
        // Integer blend; dividing by 100 last keeps the floor exact.
        let final_score =
            (accuracy * settings.accuracy_weight() + speed * settings.speed_weight()) / 100;
        let rank = Rank::from_score(final_score);

        Ok(Self {
            tier,
            score,
            total_questions,
            elapsed_seconds,
            accuracy,
            speed,
            final_score,
            rank,
        })
    }

    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Questions credited (first-try correct answers).
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    /// Whole seconds between race start and finish.
    #[must_use]
    pub fn elapsed_seconds(&self) -> i64 {
        self.elapsed_seconds
    }

    /// 0-100, rounded percent of questions credited.
    #[must_use]
    pub fn accuracy(&self) -> u32 {
        self.accuracy
    }

    /// 0-100, time-based component.
    #[must_use]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// 0-100 blended score.
    #[must_use]
    pub fn final_score(&self) -> u32 {
        self.final_score
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent_rounded(part: u32, whole: u32) -> u32 {
    let ratio = f64::from(part) / f64::from(whole);
    (ratio * 100.0).round() as u32
}

fn speed_score(elapsed_secs: i64, target_secs: i64, penalty_per_sec: i64) -> u32 {
    if elapsed_secs <= target_secs {
        return 100;
    }
    let overtime = elapsed_secs - target_secs;
    let remaining = 100_i64.saturating_sub(penalty_per_sec.saturating_mul(overtime));
    u32::try_from(remaining.max(0)).unwrap_or(0)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
