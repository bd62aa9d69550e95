use crate::core::WordError;
use thiserror::Error;

/// Recoverable errors from a guess submission
///
/// Neither variant changes the round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("please enter a valid 5-letter word ({0})")]
    InvalidGuess(#[from] WordError),
    #[error("this round is over, start a new one to keep playing")]
    RoundOver,
}
