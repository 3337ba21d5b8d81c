/// Aggregated view of race progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub score: u32,
    pub is_complete: bool,
}

impl RaceProgress {
    /// Checkpoints passed as an integer percent, for progress bars.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let percent = self.answered * 100 / self.total;
        u32::try_from(percent).unwrap_or(100)
    }
}
