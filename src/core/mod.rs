//! Core domain types for the game
//!
//! Words, per-letter feedback and the letter-status memory. Everything here is
//! pure and has no knowledge of rounds or presentation.

mod feedback;
mod memory;
mod word;

pub use feedback::{Classification, LetterClassification};
pub use memory::LetterStatusMemory;
pub use word::{WORD_LEN, Word, WordError};
