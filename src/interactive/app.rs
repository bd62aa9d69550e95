//! TUI application state and logic

use super::timer::CosmeticTimer;
use crate::game::{Game, GameError, MAX_ATTEMPTS, Verdict};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::prelude::IndexedRandom;
use ratatui::{Terminal, backend::CrosstermBackend, style::Color};
use std::io;
use std::time::Instant;

/// Longest line the input box accepts
const INPUT_LIMIT: usize = 12;

/// Background colours the screen cycles through
pub const BACKGROUND_PALETTE: [Color; 12] = [
    Color::Rgb(0, 0, 128),     // navy
    Color::Rgb(0, 100, 0),     // dark green
    Color::Rgb(139, 0, 0),     // dark red
    Color::Rgb(0, 0, 139),     // dark blue
    Color::Rgb(255, 140, 0),   // dark orange
    Color::Rgb(0, 0, 255),     // blue
    Color::Rgb(0, 255, 255),   // cyan
    Color::Rgb(0, 128, 0),     // green
    Color::Rgb(255, 0, 255),   // magenta
    Color::Rgb(255, 255, 0),   // yellow
    Color::Rgb(255, 99, 71),   // tomato
    Color::Rgb(238, 130, 238), // violet
];

/// Application state
pub struct App {
    pub game: Game,
    pub input_buffer: String,
    pub message: Option<Message>,
    pub background: Color,
    pub clock: String,
    pub should_quit: bool,
    timer: CosmeticTimer,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            input_buffer: String::new(),
            message: Some(Message {
                text: format!("Guess the 5-letter word. You have {MAX_ATTEMPTS} attempts."),
                style: MessageStyle::Info,
            }),
            background: BACKGROUND_PALETTE[0],
            clock: wall_clock(),
            should_quit: false,
            timer: CosmeticTimer::new(Instant::now()),
        }
    }

    /// Dispatch a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.restart(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                if self.input_buffer.chars().count() < INPUT_LIMIT {
                    self.input_buffer.push(c);
                }
            }
            _ => {}
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.game.submit_guess(&input) {
            Ok(report) => {
                self.message = match report.verdict {
                    Verdict::Continue => None,
                    Verdict::Won { attempts, elapsed } => Some(Message {
                        text: format!(
                            "Correct! You guessed the word in {attempts} attempts and {} seconds. Ctrl-N for a new word.",
                            elapsed.as_secs()
                        ),
                        style: MessageStyle::Success,
                    }),
                    Verdict::Lost { secret } => Some(Message {
                        text: format!(
                            "Sorry, you've used all your attempts. The word was '{secret}'. Ctrl-N to try again."
                        ),
                        style: MessageStyle::Error,
                    }),
                };
            }
            Err(GameError::InvalidGuess(_)) => {
                self.set_message("Please enter a valid 5-letter word.", MessageStyle::Error);
            }
            Err(GameError::RoundOver) => {
                self.set_message(
                    "This round is over. Press Ctrl-N for a new word.",
                    MessageStyle::Info,
                );
            }
        }
    }

    /// Start a new round and clear the board
    pub fn restart(&mut self) {
        self.game.restart();
        self.input_buffer.clear();
        self.message = None;
    }

    /// Advance cosmetic state; never touches the game
    pub fn tick(&mut self, now: Instant) {
        let fired = self.timer.fire(now);
        if fired.clock {
            self.clock = wall_clock();
        }
        if fired.background
            && let Some(&color) = BACKGROUND_PALETTE.choose(&mut rand::rng())
        {
            self.background = color;
        }
    }

    fn set_message(&mut self, text: &str, style: MessageStyle) {
        self.message = Some(Message {
            text: text.to_string(),
            style,
        });
    }
}

fn wall_clock() -> String {
    chrono::Local::now().format("%I:%M:%S").to_string()
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling. The terminal is restored in every case.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = enter_screen().inspect_err(|_| {
        if let Err(err) = leave_screen(&mut io::stdout()) {
            log::warn!("failed to restore terminal: {err}");
        }
    })?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    let restored = leave_screen(terminal.backend_mut()).and_then(|()| terminal.show_cursor());
    settle(res, restored)
}

fn enter_screen() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn leave_screen<W: io::Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen)
}

/// Combine the loop result with terminal restoration; a loop error wins
fn settle(res: Result<()>, restored: io::Result<()>) -> Result<()> {
    match (res, restored) {
        (Err(err), restored) => {
            if let Err(cleanup) = restored {
                log::warn!("failed to restore terminal: {cleanup}");
            }
            log::error!("TUI loop failed: {err:#}");
            Err(err)
        }
        (Ok(()), restored) => Ok(restored?),
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Wait for input, but wake up for the next cosmetic tick
        let timeout = app.timer.until_next(Instant::now());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
