use serde::{Deserialize, Serialize};

use crate::model::{Challenge, Tier};

/// Read-only mapping from difficulty tier to its pool of challenges.
///
/// Built once at startup (see [`crate::catalog::builtin_bank`]) and handed
/// to the race engine as shared immutable data, so tests can substitute a
/// bank of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    beginner: Vec<Challenge>,
    intermediate: Vec<Challenge>,
    advanced: Vec<Challenge>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(
        beginner: Vec<Challenge>,
        intermediate: Vec<Challenge>,
        advanced: Vec<Challenge>,
    ) -> Self {
        Self {
            beginner,
            intermediate,
            advanced,
        }
    }

    /// Challenge pool for the given tier, in authoring order.
    #[must_use]
    pub fn challenges(&self, tier: Tier) -> &[Challenge] {
        match tier {
            Tier::Beginner => &self.beginner,
            Tier::Intermediate => &self.intermediate,
            Tier::Advanced => &self.advanced,
        }
    }

    /// Returns true when the given tier has no challenges to draw from.
    #[must_use]
    pub fn is_tier_empty(&self, tier: Tier) -> bool {
        self.challenges(tier).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn challenge() -> Challenge {
        Challenge::new(
            "x = 1\nprint(x)",
            vec![Question::new("Where is x printed?", 2).unwrap()],
        )
        .unwrap()
    }

    #[test]
    fn lookup_is_per_tier() {
        let bank = QuestionBank::new(vec![challenge()], Vec::new(), vec![challenge(), challenge()]);

        assert_eq!(bank.challenges(Tier::Beginner).len(), 1);
        assert!(bank.is_tier_empty(Tier::Intermediate));
        assert_eq!(bank.challenges(Tier::Advanced).len(), 2);
    }
}
