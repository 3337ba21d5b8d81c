use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Tier;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("target seconds must be > 0 for every tier")]
    InvalidTargetSecs,

    #[error("overtime penalty must be > 0")]
    InvalidOvertimePenalty,

    #[error("accuracy and speed weights must sum to 100, got {sum}")]
    InvalidWeights { sum: u32 },

    #[error("max attempts must be > 0")]
    InvalidMaxAttempts,
}

//
// ─── RACE SETTINGS ────────────────────────────────────────────────────────────
//

/// Fixed scoring rule table for races.
///
/// Covers the per-tier target times, the per-second overtime penalty, the
/// accuracy/speed blend weights, and the advisory per-question attempt
/// limit. Not user-editable at runtime; the engine receives one table per
/// service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceSettings {
    beginner_target_secs: u32,
    intermediate_target_secs: u32,
    advanced_target_secs: u32,
    overtime_penalty_per_sec: u32,
    accuracy_weight: u32,
    speed_weight: u32,
    max_attempts: u32,
}

impl RaceSettings {
    /// The standard rule table.
    ///
    /// Target times are 10s / 10s / 120s. The intermediate value matching
    /// beginner is preserved from the original rules on purpose; adjusting
    /// it would change published scores.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            beginner_target_secs: 10,
            intermediate_target_secs: 10,
            advanced_target_secs: 120,
            overtime_penalty_per_sec: 2,
            accuracy_weight: 60,
            speed_weight: 40,
            max_attempts: 2,
        }
    }

    /// Creates a custom rule table.
    ///
    /// # Errors
    ///
    /// Returns an error if any target or the penalty is zero, if the blend
    /// weights do not sum to 100, or if `max_attempts` is zero.
    pub fn new(
        beginner_target_secs: u32,
        intermediate_target_secs: u32,
        advanced_target_secs: u32,
        overtime_penalty_per_sec: u32,
        accuracy_weight: u32,
        speed_weight: u32,
        max_attempts: u32,
    ) -> Result<Self, SettingsError> {
        if beginner_target_secs == 0 || intermediate_target_secs == 0 || advanced_target_secs == 0
        {
            return Err(SettingsError::InvalidTargetSecs);
        }
        if overtime_penalty_per_sec == 0 {
            return Err(SettingsError::InvalidOvertimePenalty);
        }
        let sum = accuracy_weight + speed_weight;
        if sum != 100 {
            return Err(SettingsError::InvalidWeights { sum });
        }
        if max_attempts == 0 {
            return Err(SettingsError::InvalidMaxAttempts);
        }

        Ok(Self {
            beginner_target_secs,
            intermediate_target_secs,
            advanced_target_secs,
            overtime_penalty_per_sec,
            accuracy_weight,
            speed_weight,
            max_attempts,
        })
    }

    /// Target race time for a tier; finishing under it scores full speed.
    #[must_use]
    pub fn target_secs(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Beginner => self.beginner_target_secs,
            Tier::Intermediate => self.intermediate_target_secs,
            Tier::Advanced => self.advanced_target_secs,
        }
    }

    /// Speed points lost per whole second over target.
    #[must_use]
    pub fn overtime_penalty_per_sec(&self) -> u32 {
        self.overtime_penalty_per_sec
    }

    /// Accuracy share of the final score, as an integer percent.
    #[must_use]
    pub fn accuracy_weight(&self) -> u32 {
        self.accuracy_weight
    }

    /// Speed share of the final score, as an integer percent.
    #[must_use]
    pub fn speed_weight(&self) -> u32 {
        self.speed_weight
    }

    /// Advisory attempt limit per question.
    ///
    /// The engine does not cut a question off after this many misses; only
    /// the first miss forfeits the point. Front ends may still display the
    /// limit.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for RaceSettings {
    fn default() -> Self {
        Self::standard()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_matches_original_rules() {
        let settings = RaceSettings::standard();
        assert_eq!(settings.target_secs(Tier::Beginner), 10);
        assert_eq!(settings.target_secs(Tier::Intermediate), 10);
        assert_eq!(settings.target_secs(Tier::Advanced), 120);
        assert_eq!(settings.overtime_penalty_per_sec(), 2);
        assert_eq!(settings.accuracy_weight(), 60);
        assert_eq!(settings.speed_weight(), 40);
        assert_eq!(settings.max_attempts(), 2);
    }

    #[test]
    fn rejects_zero_target() {
        let err = RaceSettings::new(0, 10, 120, 2, 60, 40, 2).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidTargetSecs));
    }

    #[test]
    fn rejects_unbalanced_weights() {
        let err = RaceSettings::new(10, 10, 120, 2, 60, 50, 2).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidWeights { sum: 110 }));
    }

    #[test]
    fn rejects_zero_penalty_and_attempts() {
        assert!(matches!(
            RaceSettings::new(10, 10, 120, 0, 60, 40, 2).unwrap_err(),
            SettingsError::InvalidOvertimePenalty
        ));
        assert!(matches!(
            RaceSettings::new(10, 10, 120, 2, 60, 40, 0).unwrap_err(),
            SettingsError::InvalidMaxAttempts
        ));
    }
}
