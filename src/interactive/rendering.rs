//! TUI rendering with ratatui
//!
//! Board, input box, letter legend and status line for the game.

use super::app::{App, MessageStyle};
use crate::core::{LetterClassification, WORD_LEN};
use crate::game::RoundState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    // Rotating backdrop behind every panel
    f.render_widget(
        Block::default().style(Style::default().bg(app.background)),
        f.area(),
    );

    let board_height = u16::try_from(app.game.round().max_attempts()).unwrap_or(6) + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(3),            // Clock and attempts
            Constraint::Length(board_height), // Board
            Constraint::Length(3),            // Input
            Constraint::Length(3),            // Legend
            Constraint::Length(4),            // Message
            Constraint::Length(1),            // Key help
            Constraint::Min(0),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_status(f, app, chunks[1]);
    render_board(f, app.game.round(), chunks[2]);
    render_input(f, app, chunks[3]);
    render_legend(f, app.game.round(), chunks[4]);
    render_message(f, app, chunks[5]);
    render_help(f, chunks[6]);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::White).bg(Color::Black))
}

fn tile_style(mark: LetterClassification) -> Style {
    match mark {
        LetterClassification::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterClassification::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterClassification::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
    .add_modifier(Modifier::BOLD)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(panel(""));
    f.render_widget(header, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let round = app.game.round();
    let stats = app.game.stats();

    let line = Line::from(vec![
        Span::styled(
            format!("Time: {}", app.clock),
            Style::default().fg(Color::White),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Attempts: {}", round.attempts_used()),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("   "),
        Span::raw(format!(
            "Played: {} | Win rate: {:.0}%",
            stats.rounds_played,
            stats.win_rate()
        )),
    ]);

    let status = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(panel(""));
    f.render_widget(status, area);
}

fn render_board(f: &mut Frame, round: &RoundState, area: Rect) {
    let empty = Style::default().fg(Color::Black).bg(Color::White);

    let rows: Vec<Line> = (0..round.max_attempts())
        .map(|row| {
            let mut spans = Vec::with_capacity(WORD_LEN * 2);
            match round.history().get(row) {
                Some(record) => {
                    for (letter, &mark) in record
                        .guess
                        .text()
                        .chars()
                        .zip(record.classification.marks())
                    {
                        spans.push(Span::styled(
                            format!(" {} ", letter.to_ascii_uppercase()),
                            tile_style(mark),
                        ));
                        spans.push(Span::raw(" "));
                    }
                }
                None => {
                    for _ in 0..WORD_LEN {
                        spans.push(Span::styled("   ", empty));
                        spans.push(Span::raw(" "));
                    }
                }
            }
            spans.pop();
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(rows)
        .alignment(Alignment::Center)
        .block(panel(" Board "));
    f.render_widget(board, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = if app.game.round().is_over() {
        (" Round over | Ctrl-N for a new word ", Color::Green)
    } else {
        (" Enter your guess ", Color::Yellow)
    };

    let input = Paragraph::new(app.input_buffer.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color).bg(Color::Black)),
        );
    f.render_widget(input, area);
}

fn render_legend(f: &mut Frame, round: &RoundState, area: Rect) {
    let mut spans = Vec::with_capacity(26 * 2);
    for (letter, status) in round.memory().alphabet() {
        let style = status.map_or_else(|| Style::default().fg(Color::Gray), tile_style);
        spans.push(Span::styled(letter.to_ascii_uppercase().to_string(), style));
        spans.push(Span::raw(" "));
    }
    spans.pop();

    let legend = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(panel(" Letters "));
    f.render_widget(legend, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.message {
        Some(message) => {
            let color = match message.style {
                MessageStyle::Info => Color::White,
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            (message.text.as_str(), Style::default().fg(color))
        }
        None => ("", Style::default()),
    };

    let message = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: true })
        .block(panel(""));
    f.render_widget(message, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("Enter: submit | Ctrl-N: new word | Esc: quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray).bg(Color::Black));
    f.render_widget(help, area);
}
