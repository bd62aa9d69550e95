//! Round and session state
//!
//! `RoundState` is the state machine for a single secret word; `Game` owns the
//! word pool, the random source and the current round, and keeps running
//! statistics across rounds.

mod error;
mod round;
mod session;
mod stats;

pub use error::GameError;
pub use round::{GuessRecord, GuessReport, MAX_ATTEMPTS, Outcome, RoundState, Verdict};
pub use session::Game;
pub use stats::SessionStats;
