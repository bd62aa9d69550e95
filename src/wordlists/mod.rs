//! Word lists for the game
//!
//! An embedded list compiled into the binary, plus loading of custom lists.

mod embedded;
pub mod loader;

pub use embedded::WORDS;
pub use loader::{PoolError, WordPool};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_is_not_tiny() {
        assert!(WORDS.len() > 100);
    }
}
