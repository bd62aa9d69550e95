//! Logger setup
//!
//! Library code only uses the `log` macros. The binary installs an
//! `env_logger` backend here; `RUST_LOG` overrides the configured level.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("cannot open log file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    AlreadySet(#[from] log::SetLoggerError),
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LevelFilter,
    /// Append to this file instead of writing to stderr
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Warn,
            file: None,
        }
    }
}

/// Install the global logger
///
/// # Errors
///
/// Fails if the log file cannot be opened or a logger is already installed.
pub fn init(config: &LogConfig) -> Result<(), LogInitError> {
    let mut builder = Builder::new();
    builder
        .filter_level(config.level)
        .parse_env(Env::default())
        .format_timestamp_millis();

    if let Some(path) = &config.file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LogInitError::Open {
                path: path.clone(),
                source,
            })?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;
    Ok(())
}
