//! Simple line-based game mode
//!
//! Plays rounds over any reader/writer pair; stdin/stdout in the binary.

use crate::game::{Game, GameError};
use crate::output::{print_attempts, print_board, print_legend, print_stats, print_verdict};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the line-based game until the player quits or input ends
///
/// Commands: `new` starts a fresh round, `quit` exits. Any other line is
/// submitted as a guess.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<G, R, W>(game: &mut Game<G>, mut input: R, mut out: W) -> io::Result<()>
where
    G: Rng,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════╗")?;
    writeln!(out, "║       Guess the 5-letter word!           ║")?;
    writeln!(out, "╚══════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "You have {} attempts. Type 'new' for a new word, 'quit' to exit.\n",
        game.round().max_attempts()
    )?;

    loop {
        let Some(line) = prompt(
            &mut input,
            &mut out,
            &format!(
                "Guess {}/{}",
                game.round().attempts_used() + 1,
                game.round().max_attempts()
            ),
        )?
        else {
            return farewell(&mut out);
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return farewell(&mut out),
            "new" | "n" | "restart" => {
                game.start();
                writeln!(out, "\nNew round started!\n")?;
                continue;
            }
            _ => {}
        }

        match game.submit_guess(&line) {
            Ok(report) => {
                writeln!(out)?;
                print_board(&mut out, game.round())?;
                writeln!(out)?;
                print_legend(&mut out, game.round())?;
                print_attempts(&mut out, game.round())?;
                print_verdict(&mut out, &report)?;
                writeln!(out)?;
            }
            Err(GameError::InvalidGuess(_)) => {
                writeln!(out, "Please enter a valid 5-letter word.\n")?;
                continue;
            }
            Err(GameError::RoundOver) => {
                writeln!(out, "This round is over. Type 'new' to play again.\n")?;
                continue;
            }
        }

        if game.round().is_over() {
            print_stats(&mut out, game.stats())?;
            writeln!(out)?;

            let answer = prompt(&mut input, &mut out, "Play again? (yes/no)")?;
            match answer.as_deref().map(str::to_lowercase).as_deref() {
                Some("yes" | "y") => {
                    game.start();
                    writeln!(out, "\nNew round started!\n")?;
                }
                _ => return farewell(&mut out),
            }
        }
    }
}

fn farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nThanks for playing!\n")
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
