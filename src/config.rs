//! Game configuration
//!
//! Built from the command line in `main`; kept separate so tests and other
//! front ends can construct a game the same way.

use crate::game::Game;
use crate::wordlists::{PoolError, WordPool};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Where the secret word candidates come from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordSource {
    /// List compiled into the binary
    #[default]
    Embedded,
    /// Newline-delimited text file
    File(PathBuf),
}

impl WordSource {
    /// Interpret a `--wordlist` argument
    ///
    /// "embedded" (the default) selects the built-in list; anything else is a path.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "builtin" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load the pool this source describes
    ///
    /// # Errors
    ///
    /// Returns `PoolError` if the file cannot be read or holds no valid word.
    pub fn load_pool(&self) -> Result<WordPool, PoolError> {
        match self {
            Self::Embedded => WordPool::embedded(),
            Self::File(path) => {
                log::info!("loading word list from {}", path.display());
                WordPool::load_from_file(path)
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub word_source: WordSource,
    /// Fixed seed for reproducible secret selection
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Random source for secret selection
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                log::debug!("using fixed seed {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        }
    }

    /// Load the pool and start a session
    ///
    /// # Errors
    ///
    /// Returns `PoolError` if the word list is unusable; this is fatal.
    pub fn build_game(&self) -> Result<Game, PoolError> {
        let pool = self.word_source.load_pool()?;
        Ok(Game::new(pool, self.rng()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;

    #[test]
    fn word_source_from_arg() {
        assert_eq!(WordSource::from_arg("embedded"), WordSource::Embedded);
        assert_eq!(WordSource::from_arg("builtin"), WordSource::Embedded);
        assert_eq!(
            WordSource::from_arg("words.txt"),
            WordSource::File(PathBuf::from("words.txt"))
        );
    }

    #[test]
    fn default_config_uses_embedded_list() {
        let game = GameConfig::default().build_game().unwrap();
        assert!(WORDS.contains(&game.round().secret().text()));
    }

    #[test]
    fn seeded_configs_pick_the_same_secret() {
        let config = GameConfig {
            seed: Some(99),
            ..GameConfig::default()
        };
        let a = config.build_game().unwrap();
        let b = config.build_game().unwrap();
        assert_eq!(a.round().secret(), b.round().secret());
    }

    #[test]
    fn missing_file_is_fatal() {
        let config = GameConfig {
            word_source: WordSource::File(PathBuf::from("/no/such/words.txt")),
            seed: None,
        };
        assert!(matches!(
            config.build_game(),
            Err(PoolError::Read { .. })
        ));
    }
}
