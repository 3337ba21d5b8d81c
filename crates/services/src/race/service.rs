use std::sync::Arc;

use rand::Rng;

use racer_core::Clock;
use racer_core::model::{QuestionBank, RaceSettings, Scorecard, Tier};

use crate::error::RaceError;
use super::draw::draw_challenge;
use super::progress::RaceProgress;
use super::session::{AnswerVerdict, RaceSession};

/// Result of answering a single question in a race.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceOutcome {
    pub verdict: AnswerVerdict,
    pub progress: RaceProgress,
}

/// Orchestrates race start, answering and finishing.
///
/// Binds the clock, the read-only question bank and the scoring rule
/// table, so sessions themselves stay free of ambient state.
#[derive(Clone)]
pub struct RaceService {
    clock: Clock,
    bank: Arc<QuestionBank>,
    settings: RaceSettings,
}

impl RaceService {
    #[must_use]
    pub fn new(clock: Clock, bank: Arc<QuestionBank>) -> Self {
        Self {
            clock,
            bank,
            settings: RaceSettings::standard(),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: RaceSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &RaceSettings {
        &self.settings
    }

    /// Start a new race for the given tier with an unseeded draw.
    ///
    /// # Errors
    ///
    /// Returns `RaceError::EmptyTier` if the tier has no challenges.
    pub fn start_race(&self, tier: Tier) -> Result<RaceSession, RaceError> {
        self.start_race_with_rng(tier, &mut rand::rng())
    }

    /// Start a new race drawing the challenge from a caller-supplied rng.
    ///
    /// # Errors
    ///
    /// Returns `RaceError::EmptyTier` if the tier has no challenges.
    pub fn start_race_with_rng<R: Rng + ?Sized>(
        &self,
        tier: Tier,
        rng: &mut R,
    ) -> Result<RaceSession, RaceError> {
        let challenge = draw_challenge(&self.bank, tier, rng)?;
        RaceSession::new(tier, challenge, self.clock.now())
    }

    /// Judge an answer to the session's current question, stamping the
    /// service clock.
    ///
    /// # Errors
    ///
    /// Returns `RaceError::Completed` for a finished race and
    /// `RaceError::InvalidAnswer` for unparseable input; neither mutates
    /// the session.
    pub fn answer_current(
        &self,
        session: &mut RaceSession,
        raw: &str,
    ) -> Result<RaceOutcome, RaceError> {
        let verdict = session.submit_answer(raw, self.clock.now())?;
        Ok(RaceOutcome {
            verdict,
            progress: session.progress(),
        })
    }

    /// Stop the clock if still running and compute the final scorecard.
    ///
    /// # Errors
    ///
    /// Propagates scorecard computation failures.
    pub fn finish(&self, session: &mut RaceSession) -> Result<Scorecard, RaceError> {
        session.finalize(self.clock.now(), &self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use racer_core::catalog::builtin_bank;
    use racer_core::time::fixed_clock;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn service() -> RaceService {
        RaceService::new(fixed_clock(), Arc::new(builtin_bank()))
    }

    #[test]
    fn started_race_awaits_its_first_question() {
        let mut rng = StdRng::seed_from_u64(3);
        let session = service()
            .start_race_with_rng(Tier::Intermediate, &mut rng)
            .unwrap();

        assert_eq!(session.tier(), Tier::Intermediate);
        assert_eq!(session.question_index(), 0);
        assert!(session.current_question().is_some());
        assert!(!session.is_complete());
    }

    #[test]
    fn outcome_carries_progress() {
        let service = service();
        let mut session = service
            .start_race_with_rng(Tier::Beginner, &mut StdRng::seed_from_u64(1))
            .unwrap();

        let answer = session.current_question().unwrap().answer_line().to_string();
        let outcome = service.answer_current(&mut session, &answer).unwrap();

        assert!(matches!(
            outcome.verdict,
            AnswerVerdict::Correct { score_delta: 1, next_index: 1 }
        ));
        assert_eq!(outcome.progress.answered, 1);
        assert_eq!(outcome.progress.score, 1);
    }

    #[test]
    fn finish_uses_the_service_clock() {
        let service = service();
        let mut session = service
            .start_race_with_rng(Tier::Beginner, &mut StdRng::seed_from_u64(1))
            .unwrap();

        // Force-finish immediately: zero elapsed, full speed, zero accuracy.
        let card = service.finish(&mut session).unwrap();
        assert_eq!(card.elapsed_seconds(), 0);
        assert_eq!(card.speed(), 100);
        assert_eq!(card.accuracy(), 0);
        assert_eq!(card.final_score(), 40);
    }
}
