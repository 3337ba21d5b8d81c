use rand::Rng;
use rand::seq::IndexedRandom;

use racer_core::model::{Challenge, QuestionBank, Tier};

use crate::error::RaceError;

/// Draws one challenge uniformly at random from the tier's pool.
///
/// The rng is caller-supplied so tests (and the `--seed` flag) can pin
/// which challenge comes up.
///
/// # Errors
///
/// Returns `RaceError::EmptyTier` if the tier has no challenges.
pub fn draw_challenge<R: Rng + ?Sized>(
    bank: &QuestionBank,
    tier: Tier,
    rng: &mut R,
) -> Result<Challenge, RaceError> {
    bank.challenges(tier)
        .choose(rng)
        .cloned()
        .ok_or(RaceError::EmptyTier(tier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use racer_core::catalog::builtin_bank;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn seeded_draw_is_deterministic() {
        let bank = builtin_bank();
        let a = draw_challenge(&bank, Tier::Advanced, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = draw_challenge(&bank, Tier::Advanced, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn draw_comes_from_the_requested_tier() {
        let bank = builtin_bank();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..20 {
            let drawn = draw_challenge(&bank, Tier::Beginner, &mut rng).unwrap();
            assert!(bank.challenges(Tier::Beginner).contains(&drawn));
        }
    }

    #[test]
    fn empty_tier_is_an_error() {
        let bank = QuestionBank::new(Vec::new(), Vec::new(), Vec::new());
        let err = draw_challenge(&bank, Tier::Beginner, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, RaceError::EmptyTier(Tier::Beginner)));
    }
}
