//! Interactive TUI interface

mod app;
mod rendering;
mod timer;

pub use app::{App, BACKGROUND_PALETTE, Message, MessageStyle, run_tui};
pub use timer::{CosmeticTimer, Fired};
