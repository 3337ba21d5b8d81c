use chrono::{DateTime, Utc};
use std::fmt;

use racer_core::model::{Challenge, Question, RaceSettings, Scorecard, Tier};

use crate::error::RaceError;
use super::progress::RaceProgress;

//
// ─── ANSWER VERDICT ───────────────────────────────────────────────────────────
//

/// Judgement for one submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerVerdict {
    /// Right line. `score_delta` is 0 when an earlier miss on this question
    /// already forfeited the point; `next_index` is the new question cursor.
    Correct { score_delta: u32, next_index: usize },
    /// Wrong line. The correct one is revealed immediately and the player
    /// may retry; only the first miss costs the point.
    Incorrect { correct_line: u32 },
}

//
// ─── RACE SESSION ─────────────────────────────────────────────────────────────
//

/// In-memory state machine for one player's race over one challenge.
///
/// Steps through the challenge's questions sequentially. Advancing requires
/// a correct answer; the clock keeps running through misses. Timestamps are
/// supplied by the services layer so time stays deterministic.
pub struct RaceSession {
    tier: Tier,
    challenge: Challenge,
    current: usize,
    score: u32,
    wrong_attempt: bool,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl RaceSession {
    /// Creates a session positioned at the first question.
    ///
    /// # Errors
    ///
    /// Returns `RaceError::Empty` if the challenge has no questions. A
    /// validated [`Challenge`] always has at least one, so this only fires
    /// for hand-built test data.
    pub fn new(
        tier: Tier,
        challenge: Challenge,
        started_at: DateTime<Utc>,
    ) -> Result<Self, RaceError> {
        if challenge.question_count() == 0 {
            return Err(RaceError::Empty);
        }

        Ok(Self {
            tier,
            challenge,
            current: 0,
            score: 0,
            wrong_attempt: false,
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    #[must_use]
    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Questions credited so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total number of questions in this race.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.challenge.question_count()
    }

    /// Number of questions already passed.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.current
    }

    /// Zero-based cursor of the question awaiting an answer.
    #[must_use]
    pub fn question_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// The question awaiting an answer, or `None` once the race is done.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.challenge.question(self.current)
    }

    /// Returns a summary of the current race progress.
    #[must_use]
    pub fn progress(&self) -> RaceProgress {
        RaceProgress {
            total: self.total_questions(),
            answered: self.current,
            remaining: self.total_questions().saturating_sub(self.current),
            score: self.score,
            is_complete: self.is_complete(),
        }
    }

    /// Judges a submitted answer against the current question.
    ///
    /// A correct answer advances the cursor and, when it was the first
    /// attempt on that question, credits a point; answering the last
    /// question stamps `completed_at` with `answered_at`. A wrong answer
    /// only marks the question as missed. `answered_at` should come from
    /// the services layer clock.
    ///
    /// # Errors
    ///
    /// Returns `RaceError::Completed` after the race finished and
    /// `RaceError::InvalidAnswer` when `raw` does not parse as a line
    /// number. Neither mutates the session.
    pub fn submit_answer(
        &mut self,
        raw: &str,
        answered_at: DateTime<Utc>,
    ) -> Result<AnswerVerdict, RaceError> {
        if self.is_complete() {
            return Err(RaceError::Completed);
        }
        let Some(question) = self.current_question() else {
            return Err(RaceError::Completed);
        };
        let correct_line = question.answer_line();

        let guess: u32 = raw
            .trim()
            .parse()
            .map_err(|_| RaceError::InvalidAnswer { raw: raw.trim().to_string() })?;

        if guess != correct_line {
            self.wrong_attempt = true;
            return Ok(AnswerVerdict::Incorrect { correct_line });
        }

        let score_delta = if self.wrong_attempt { 0 } else { 1 };
        self.score += score_delta;
        self.wrong_attempt = false;
        self.current += 1;
        if self.current >= self.challenge.question_count() {
            self.completed_at = Some(answered_at);
        }

        Ok(AnswerVerdict::Correct {
            score_delta,
            next_index: self.current,
        })
    }

    /// Stops the clock (if still running) and computes the scorecard.
    ///
    /// May be called before every question is answered to force-finish an
    /// abandoned race. Idempotent: `completed_at` never moves once set, so
    /// repeated calls return the same values.
    ///
    /// # Errors
    ///
    /// Propagates `ScorecardError` via `RaceError::Scorecard`.
    pub fn finalize(
        &mut self,
        now: DateTime<Utc>,
        settings: &RaceSettings,
    ) -> Result<Scorecard, RaceError> {
        let completed_at = *self.completed_at.get_or_insert(now);
        let total = u32::try_from(self.total_questions()).unwrap_or(u32::MAX);

        Ok(Scorecard::compute(
            self.tier,
            self.score,
            total,
            self.started_at,
            completed_at,
            settings,
        )?)
    }
}

impl fmt::Debug for RaceSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RaceSession")
            .field("tier", &self.tier)
            .field("questions", &self.challenge.question_count())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("wrong_attempt", &self.wrong_attempt)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
