//! Game session: pool, randomness, current round and statistics

use super::{GameError, GuessReport, RoundState, SessionStats, Verdict};
use crate::wordlists::WordPool;
use rand::Rng;
use rand::rngs::StdRng;

/// Owns everything a presentation needs to run rounds back to back
///
/// The presentation calls [`Game::start`] on launch and on restart, and
/// [`Game::submit_guess`] for every submitted line.
pub struct Game<R = StdRng> {
    pool: WordPool,
    rng: R,
    round: RoundState,
    stats: SessionStats,
}

impl<R: Rng> Game<R> {
    /// Create a session with its first round already started
    pub fn new(pool: WordPool, mut rng: R) -> Self {
        let round = Self::new_round(&pool, &mut rng);
        Self {
            pool,
            rng,
            round,
            stats: SessionStats::default(),
        }
    }

    fn new_round(pool: &WordPool, rng: &mut R) -> RoundState {
        let round = RoundState::new(pool.pick_secret(rng).clone());
        log::info!("round started ({} candidate words)", pool.len());
        log::trace!("secret for this round: {}", round.secret());
        round
    }

    /// Begin a new round with a fresh secret
    ///
    /// Attempts, letter memory and history are reset whatever the previous
    /// outcome. A round abandoned after at least one guess counts as played.
    pub fn start(&mut self) -> &RoundState {
        if !self.round.is_over() && self.round.attempts_used() > 0 {
            log::info!(
                "abandoning round after {} attempts",
                self.round.attempts_used()
            );
            self.stats.record_loss();
        }

        self.round = Self::new_round(&self.pool, &mut self.rng);
        &self.round
    }

    /// Same as [`Game::start`]
    pub fn restart(&mut self) -> &RoundState {
        self.start()
    }

    /// Submit a raw guess to the current round
    ///
    /// # Errors
    ///
    /// Propagates `GameError` from the round; statistics and round state are
    /// unchanged in that case.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessReport, GameError> {
        let report = self.round.submit_guess(raw).inspect_err(|err| {
            log::debug!("guess rejected: {err}");
        })?;

        match &report.verdict {
            Verdict::Continue => {
                log::debug!(
                    "guess {} scored {}, {} attempts left",
                    report.guess,
                    report.classification.to_emoji(),
                    report.attempts_remaining
                );
            }
            Verdict::Won { attempts, elapsed } => {
                log::info!("round won in {attempts} attempts, {}s", elapsed.as_secs());
                self.stats.record_win(*attempts);
            }
            Verdict::Lost { secret } => {
                log::info!("round lost, secret was {secret}");
                self.stats.record_loss();
            }
        }

        Ok(report)
    }

    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatusMemory;
    use crate::game::{MAX_ATTEMPTS, Outcome};
    use rand::SeedableRng;

    fn game(words: &str) -> Game {
        Game::new(WordPool::load(words).unwrap(), StdRng::seed_from_u64(1))
    }

    #[test]
    fn new_game_has_round_in_progress() {
        let game = game("crane\nslate");
        assert_eq!(game.round().outcome(), Outcome::InProgress);
        assert!(["crane", "slate"].contains(&game.round().secret().text()));
    }

    #[test]
    fn start_resets_after_loss() {
        let mut game = game("crane");
        for _ in 0..MAX_ATTEMPTS {
            game.submit_guess("slate").unwrap();
        }
        assert_eq!(game.round().outcome(), Outcome::Lost);
        assert_eq!(game.submit_guess("slate"), Err(GameError::RoundOver));

        let round = game.start();
        assert_eq!(round.attempts_used(), 0);
        assert_eq!(round.memory(), &LetterStatusMemory::default());
        assert!(round.history().is_empty());
        assert_eq!(round.outcome(), Outcome::InProgress);
    }

    #[test]
    fn start_resets_after_win() {
        let mut game = game("crane");
        game.submit_guess("crane").unwrap();
        assert_eq!(game.round().outcome(), Outcome::Won);

        game.restart();
        assert_eq!(game.round().attempts_used(), 0);
        assert_eq!(game.round().memory(), &LetterStatusMemory::default());
        assert!(game.submit_guess("crane").is_ok());
    }

    #[test]
    fn start_resets_mid_round() {
        let mut game = game("crane");
        game.submit_guess("slate").unwrap();
        game.submit_guess("irate").unwrap();

        game.start();
        assert_eq!(game.round().attempts_used(), 0);
        assert_eq!(game.round().memory(), &LetterStatusMemory::default());
    }

    #[test]
    fn stats_follow_outcomes() {
        let mut game = game("crane");
        game.submit_guess("crane").unwrap();
        game.start();
        for _ in 0..MAX_ATTEMPTS {
            game.submit_guess("slate").unwrap();
        }
        game.start();
        // abandoned after one guess
        game.submit_guess("slate").unwrap();
        game.start();
        // abandoned before any guess is not counted
        game.start();

        let stats = game.stats();
        assert_eq!(stats.rounds_played, 3);
        assert_eq!(stats.rounds_won, 1);
        assert_eq!(stats.guess_distribution[1], 1);
    }

    #[test]
    fn rejected_guess_leaves_stats_alone() {
        let mut game = game("crane");
        game.submit_guess("crane").unwrap();
        let before = game.stats().clone();
        assert_eq!(game.submit_guess("crane"), Err(GameError::RoundOver));
        assert!(matches!(
            game.submit_guess("nope"),
            Err(GameError::RoundOver)
        ));
        assert_eq!(game.stats(), &before);
    }

    #[test]
    fn secrets_vary_across_rounds() {
        let mut game = game("crane\nslate\nirate\nadieu\nroast");
        let mut secrets = rustc_hash::FxHashSet::default();
        for _ in 0..100 {
            secrets.insert(game.start().secret().text().to_string());
        }
        assert!(secrets.len() > 1);
    }
}
