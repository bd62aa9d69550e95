//! Single-round state machine
//!
//! `InProgress` moves to `Won` on an exact guess or to `Lost` once all attempts
//! are spent. Both are terminal; only a fresh `RoundState` plays again.

use super::GameError;
use crate::core::{Classification, LetterStatusMemory, Word};
use std::time::{Duration, Instant};

/// Guesses allowed per round
pub const MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub classification: Classification,
}

/// What the presentation should announce after a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    Won { attempts: usize, elapsed: Duration },
    Lost { secret: Word },
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub guess: Word,
    pub classification: Classification,
    pub attempts_used: usize,
    pub attempts_remaining: usize,
    pub verdict: Verdict,
}

/// State of one round: secret, attempts, letter memory and board history
#[derive(Debug, Clone)]
pub struct RoundState {
    secret: Word,
    attempts_used: usize,
    max_attempts: usize,
    started_at: Instant,
    outcome: Outcome,
    memory: LetterStatusMemory,
    history: Vec<GuessRecord>,
}

impl RoundState {
    /// Fresh round starting now
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self::started_at(secret, Instant::now())
    }

    /// Fresh round with an explicit start time
    #[must_use]
    pub fn started_at(secret: Word, started_at: Instant) -> Self {
        Self {
            secret,
            attempts_used: 0,
            max_attempts: MAX_ATTEMPTS,
            started_at,
            outcome: Outcome::InProgress,
            memory: LetterStatusMemory::new(),
            history: Vec::with_capacity(MAX_ATTEMPTS),
        }
    }

    /// Validate and score a raw guess
    ///
    /// # Errors
    ///
    /// - `GameError::RoundOver` if the round already ended
    /// - `GameError::InvalidGuess` if the input is not five letters
    ///
    /// On error the round is left untouched and no attempt is used.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessReport, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::RoundOver);
        }

        let guess = Word::new(raw)?;
        let classification = Classification::calculate(&guess, &self.secret);

        self.memory.update(&guess, &classification);
        self.history.push(GuessRecord {
            guess: guess.clone(),
            classification,
        });
        self.attempts_used += 1;

        let verdict = if classification.is_perfect() {
            self.outcome = Outcome::Won;
            Verdict::Won {
                attempts: self.attempts_used,
                elapsed: self.elapsed(),
            }
        } else if self.attempts_used >= self.max_attempts {
            self.outcome = Outcome::Lost;
            Verdict::Lost {
                secret: self.secret.clone(),
            }
        } else {
            Verdict::Continue
        };

        Ok(GuessReport {
            guess,
            classification,
            attempts_used: self.attempts_used,
            attempts_remaining: self.attempts_remaining(),
            verdict,
        })
    }

    /// The secret word
    ///
    /// Presentations should only reveal it once the round is lost.
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts_used)
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    #[must_use]
    pub const fn memory(&self) -> &LetterStatusMemory {
        &self.memory
    }

    /// Accepted guesses in order, for drawing the board
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Time since the round started
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}
