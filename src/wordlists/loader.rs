//! Secret word pool loading and selection
//!
//! A pool is built from plain text, one candidate per line. Only lines of
//! exactly five letters survive; they are lowercased on the way in.

use super::WORDS;
use crate::core::Word;
use rand::Rng;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while building a word pool
///
/// Both are fatal at startup: a game cannot run without a pool.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("the word list contains no valid five-letter words")]
    Empty,
    #[error("failed to read word list {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Non-empty ordered list of candidate secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<Word>,
}

impl WordPool {
    /// Build a pool from newline-separated text
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Empty` if no line is a valid five-letter word.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordPool;
    ///
    /// let pool = WordPool::load("Crane\nno\nsl4te\nslate\n").unwrap();
    /// assert_eq!(pool.len(), 2);
    /// ```
    pub fn load(text: &str) -> Result<Self, PoolError> {
        Self::from_lines(text.lines())
    }

    /// Build a pool from individual candidate lines
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Empty` if no line qualifies.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, PoolError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut skipped = 0usize;
        let words: Vec<Word> = lines
            .into_iter()
            .filter_map(|line| {
                let word = Word::new(line).ok();
                if word.is_none() {
                    skipped += 1;
                }
                word
            })
            .collect();

        if words.is_empty() {
            log::error!("word list has no usable entries ({skipped} rejected)");
            return Err(PoolError::Empty);
        }

        log::info!("loaded {} candidate words ({skipped} rejected)", words.len());
        Ok(Self { words })
    }

    /// Pool built from the list compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Empty` only if the embedded list was built empty.
    pub fn embedded() -> Result<Self, PoolError> {
        Self::from_lines(WORDS.iter().copied())
    }

    /// Load a pool from a file
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Read` if the file cannot be read, or
    /// `PoolError::Empty` if it holds no valid word.
    ///
    /// # Examples
    /// ```no_run
    /// use wordle_game::wordlists::WordPool;
    ///
    /// let pool = WordPool::load_from_file("words.txt").unwrap();
    /// println!("Loaded {} words", pool.len());
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, PoolError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PoolError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load(&content)
    }

    /// Choose a secret uniformly at random
    ///
    /// Draws are independent: the same word may come up in consecutive rounds.
    pub fn pick_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        let index = rng.random_range(0..self.words.len());
        let secret = &self.words[index];
        log::debug!("picked secret #{index} of {}", self.words.len());
        secret
    }

    /// Number of candidates (always at least one)
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // a pool is never empty
    pub fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    fn texts(pool: &WordPool) -> Vec<&str> {
        pool.words.iter().map(Word::text).collect()
    }

    #[test]
    fn load_keeps_only_five_letter_words() {
        let pool = WordPool::load("crane\nslate\ntoolong\nabc\n\nsl4te\nirate").unwrap();
        assert_eq!(texts(&pool), ["crane", "slate", "irate"]);
    }

    #[test]
    fn load_lowercases() {
        let pool = WordPool::load("CRANE\nSlAtE").unwrap();
        assert_eq!(texts(&pool), ["crane", "slate"]);
    }

    #[test]
    fn load_handles_crlf_but_not_padding() {
        let pool = WordPool::load("crane\r\n slate\nirate \r\nadieu").unwrap();
        assert_eq!(texts(&pool), ["crane", "adieu"]);
    }

    #[test]
    fn load_keeps_duplicates() {
        let pool = WordPool::load("crane\ncrane\nslate").unwrap();
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn load_empty_input_fails() {
        assert!(matches!(WordPool::load(""), Err(PoolError::Empty)));
    }

    #[test]
    fn load_without_valid_lines_fails() {
        assert!(matches!(
            WordPool::load("four\nsixsix\n12345\nhe llo"),
            Err(PoolError::Empty)
        ));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = WordPool::load_from_file("/definitely/not/here/words.txt").unwrap_err();
        assert!(matches!(err, PoolError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here/words.txt"));
    }

    #[test]
    fn embedded_pool_is_usable() {
        let pool = WordPool::embedded().unwrap();
        assert_eq!(pool.len(), WORDS.len());
    }

    #[test]
    fn pick_secret_comes_from_pool() {
        let pool = WordPool::load("crane\nslate\nirate").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(pool.words.contains(pool.pick_secret(&mut rng)));
        }
    }

    #[test]
    fn pick_secret_reaches_every_word() {
        let pool = WordPool::load("crane\nslate\nirate\nadieu").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let seen: FxHashSet<&str> = (0..400).map(|_| pool.pick_secret(&mut rng).text()).collect();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn pick_secret_single_word_pool() {
        let pool = WordPool::load("crane").unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pool.pick_secret(&mut rng).text(), "crane");
        assert_eq!(pool.pick_secret(&mut rng).text(), "crane");
    }
}
