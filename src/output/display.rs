//! Display functions for round results

use super::formatters::{create_progress_bar, format_legend, format_row};
use crate::game::{GuessReport, RoundState, SessionStats, Verdict};
use colored::Colorize;
use std::io::{self, Write};

/// Print the board: every accepted guess so far
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_board<W: Write>(out: &mut W, round: &RoundState) -> io::Result<()> {
    for record in round.history() {
        writeln!(out, "  {}", format_row(record))?;
    }
    Ok(())
}

/// Print the attempts gauge, e.g. `Attempts: [██░░░░] 2/6`
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_attempts<W: Write>(out: &mut W, round: &RoundState) -> io::Result<()> {
    let bar = create_progress_bar(
        round.attempts_used() as f64,
        round.max_attempts() as f64,
        round.max_attempts(),
    );
    writeln!(
        out,
        "Attempts: [{}] {}/{}",
        bar.cyan(),
        round.attempts_used(),
        round.max_attempts()
    )
}

/// Print the letter legend for the round
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_legend<W: Write>(out: &mut W, round: &RoundState) -> io::Result<()> {
    writeln!(out, "Letters:  {}", format_legend(round.memory()))
}

/// Print the outcome line for an accepted guess
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_verdict<W: Write>(out: &mut W, report: &GuessReport) -> io::Result<()> {
    match &report.verdict {
        Verdict::Continue => writeln!(
            out,
            "{} attempts left.",
            report.attempts_remaining.to_string().bright_cyan()
        ),
        Verdict::Won { attempts, elapsed } => writeln!(
            out,
            "{}",
            format!(
                "Correct! You guessed the word in {attempts} attempts and {} seconds.",
                elapsed.as_secs()
            )
            .green()
            .bold()
        ),
        Verdict::Lost { secret } => writeln!(
            out,
            "{}",
            format!("Sorry, you've used all your attempts. The word was '{secret}'.")
                .red()
                .bold()
        ),
    }
}

/// Print session statistics
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_stats<W: Write>(out: &mut W, stats: &SessionStats) -> io::Result<()> {
    writeln!(
        out,
        "Played: {} | Won: {} | Win rate: {:.0}%",
        stats.rounds_played,
        stats.rounds_won,
        stats.win_rate()
    )?;

    if stats.rounds_won == 0 {
        return Ok(());
    }

    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, stats.rounds_won as f64, 20);
        writeln!(out, "  {guesses}: {} {count}", bar.green())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn attempts_gauge() {
        let mut round = RoundState::new(Word::new("crane").unwrap());
        round.submit_guess("slate").unwrap();
        round.submit_guess("irate").unwrap();

        let text = render(|out| print_attempts(out, &round));
        assert_eq!(text, "Attempts: [██░░░░] 2/6\n");
    }

    #[test]
    fn board_has_one_line_per_guess() {
        let mut round = RoundState::new(Word::new("crane").unwrap());
        round.submit_guess("slate").unwrap();
        round.submit_guess("irate").unwrap();

        let text = render(|out| print_board(out, &round));
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("   S  L  A  T  E "));
    }

    #[test]
    fn loss_reveals_secret() {
        let mut round = RoundState::new(Word::new("crane").unwrap());
        let mut report = None;
        for _ in 0..6 {
            report = Some(round.submit_guess("slate").unwrap());
        }

        let text = render(|out| print_verdict(out, &report.unwrap()));
        assert_eq!(
            text,
            "Sorry, you've used all your attempts. The word was 'crane'.\n"
        );
    }

    #[test]
    fn win_names_attempts() {
        let mut round = RoundState::new(Word::new("crane").unwrap());
        let report = round.submit_guess("crane").unwrap();

        let text = render(|out| print_verdict(out, &report));
        assert!(text.starts_with("Correct! You guessed the word in 1 attempts and "));
    }

    #[test]
    fn stats_with_distribution() {
        let mut stats = SessionStats::default();
        stats.record_win(2);
        stats.record_loss();

        let text = render(|out| print_stats(out, &stats));
        assert!(text.starts_with("Played: 2 | Won: 1 | Win rate: 50%\n"));
        assert_eq!(text.lines().count(), 7);
    }
}
