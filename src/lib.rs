//! Word Game
//!
//! Guess a secret five-letter word in six attempts, with per-letter feedback
//! after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_game::game::{Game, Verdict};
//! use wordle_game::wordlists::WordPool;
//!
//! let pool = WordPool::load("crane\n").unwrap();
//! let mut game = Game::new(pool, StdRng::seed_from_u64(0));
//!
//! let report = game.submit_guess("slate").unwrap();
//! println!("{}", report.classification.to_emoji());
//!
//! let report = game.submit_guess("crane").unwrap();
//! assert!(matches!(report.verdict, Verdict::Won { attempts: 2, .. }));
//! ```

// Core domain types
pub mod core;

// Round state machine and session
pub mod game;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Logger setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
