//! Win/loss tallies across the rounds of one session

use super::MAX_ATTEMPTS;

/// In-memory results for the current session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds_played: usize,
    pub rounds_won: usize,
    /// Wins by number of guesses; index 0 is unused
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl SessionStats {
    pub fn record_win(&mut self, attempts: usize) {
        self.rounds_played += 1;
        self.rounds_won += 1;
        if let Some(slot) = self.guess_distribution.get_mut(attempts) {
            *slot += 1;
        }
    }

    /// A lost round, or one abandoned after at least one guess
    pub fn record_loss(&mut self) {
        self.rounds_played += 1;
    }

    /// Percentage of played rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}
