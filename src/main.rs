//! Word Game - CLI
//!
//! Guess the secret five-letter word in six attempts, in a TUI or a plain
//! line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::run_simple,
    config::{GameConfig, WordSource},
    game::Game,
    logging::{self, LogConfig},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the secret five-letter word in six attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for secret word selection (reproducible rounds)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log level: off, error, warn, info, debug, trace (RUST_LOG overrides)
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // stderr logging would draw over the TUI, so it only logs to a file
    if !matches!(command, Commands::Play) || cli.log_file.is_some() {
        logging::init(&LogConfig {
            level: cli.log_level,
            file: cli.log_file.clone(),
        })
        .context("failed to set up logging")?;
    }

    let config = GameConfig {
        word_source: WordSource::from_arg(&cli.wordlist),
        seed: cli.seed,
    };
    let game = config
        .build_game()
        .with_context(|| format!("cannot start a game with word list '{}'", cli.wordlist))?;

    match command {
        Commands::Play => run_play_command(game),
        Commands::Simple => run_simple_command(game),
    }
}

fn run_simple_command(mut game: Game) -> Result<()> {
    let stdin = io::stdin();
    run_simple(&mut game, stdin.lock(), io::stdout()).context("line mode failed")
}

fn run_play_command(game: Game) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(game);
    run_tui(app)
}
