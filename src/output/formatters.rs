//! Formatting utilities for terminal output

use crate::core::{LetterClassification, LetterStatusMemory};
use crate::game::GuessRecord;
use colored::{ColoredString, Colorize};

/// A single coloured letter tile, e.g. " A " on green
#[must_use]
pub fn tile(letter: char, mark: LetterClassification) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        LetterClassification::Correct => text.black().on_green(),
        LetterClassification::Present => text.black().on_yellow(),
        LetterClassification::Absent => text.white().on_bright_black(),
    }
}

/// One board row: the guess as tiles followed by its emoji pattern
#[must_use]
pub fn format_row(record: &GuessRecord) -> String {
    let tiles: String = record
        .guess
        .text()
        .chars()
        .zip(record.classification.marks())
        .map(|(letter, &mark)| tile(letter, mark).to_string())
        .collect();
    format!("{tiles}  {}", record.classification.to_emoji())
}

/// The a-z legend, each played letter coloured by its best-known status
#[must_use]
pub fn format_legend(memory: &LetterStatusMemory) -> String {
    memory
        .alphabet()
        .map(|(letter, status)| {
            let upper = letter.to_ascii_uppercase().to_string();
            match status {
                Some(LetterClassification::Correct) => upper.black().on_green().to_string(),
                Some(LetterClassification::Present) => upper.black().on_yellow().to_string(),
                Some(LetterClassification::Absent) => upper.bright_black().strikethrough().to_string(),
                None => upper,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
