//! Terminal output formatting
//!
//! Coloured tiles, legends and result messages for the line-based mode.

pub mod display;
pub mod formatters;

pub use display::{print_attempts, print_board, print_legend, print_stats, print_verdict};
