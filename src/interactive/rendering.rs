//! TUI rendering with ratatui
//!
//! Gallows, masked word, letter board and hint panel.

use super::app::{App, MessageStyle};
use crate::game::{MAX_ATTEMPTS, Outcome, RoundView};
use crate::output::formatters::{
    LetterStatus, gallows, hint_button_label, letter_rows, outcome_banner, spaced_mask,
};
use crate::random::RandomSource;
use crate::wordlists::WordProvider;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<P: WordProvider, R: RandomSource>(f: &mut Frame, app: &App<P, R>) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Word and board
            Constraint::Percentage(40), // Hints and messages
        ])
        .split(chunks[1]);

    render_main_panel(f, &view, main_chunks[0]);
    render_info_panel(f, app, &view, main_chunks[1]);

    render_status(f, app, &view, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, view: &RoundView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(11),   // Gallows and word
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(6), // Letter board
        ])
        .split(area);

    render_word(f, view, chunks[0]);
    render_attempts(f, view, chunks[1]);
    render_board(f, view, chunks[2]);
}

fn render_word(f: &mut Frame, view: &RoundView, area: Rect) {
    let attempts_used = MAX_ATTEMPTS - view.remaining_attempts.min(MAX_ATTEMPTS);

    let mut lines: Vec<Line> = gallows(attempts_used)
        .into_iter()
        .map(|row| Line::styled(row, Style::default().fg(Color::Gray)))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Word: "),
        Span::styled(
            spaced_mask(&view.revealed_mask),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    if let Some(banner) = outcome_banner(view.outcome) {
        let color = if view.outcome == Outcome::Won {
            Color::Green
        } else {
            Color::Red
        };
        let mut result = vec![Span::styled(
            banner,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )];
        if let Some(secret) = &view.revealed_secret {
            result.push(Span::raw(format!("  The word was {secret}")));
        }
        lines.push(Line::from(result));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_attempts(f: &mut Frame, view: &RoundView, area: Rect) {
    let remaining = view.remaining_attempts.min(MAX_ATTEMPTS);
    let percent = u16::from(remaining) * 100 / u16::from(MAX_ATTEMPTS);
    let color = match remaining {
        0..=1 => Color::Red,
        2..=3 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}/{MAX_ATTEMPTS} left"));

    f.render_widget(gauge, area);
}

fn render_board(f: &mut Frame, view: &RoundView, area: Rect) {
    let lines: Vec<Line> = letter_rows(view)
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .map(|(letter, status)| {
                    let style = match status {
                        LetterStatus::Available => Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                        LetterStatus::Hit => Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                        LetterStatus::Miss => Style::default()
                            .fg(Color::Red)
                            .add_modifier(Modifier::CROSSED_OUT),
                        LetterStatus::Disabled => Style::default().fg(Color::DarkGray),
                    };
                    Span::styled(format!(" {letter} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel<P: WordProvider, R: RandomSource>(
    f: &mut Frame,
    app: &App<P, R>,
    view: &RoundView,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Hint
            Constraint::Min(7),    // Messages
        ])
        .split(area);

    render_hint(f, view, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_hint(f: &mut Frame, view: &RoundView, area: Rect) {
    let color = if view.next_hint.is_some() && !view.outcome.is_terminal() {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let content = vec![
        Line::styled(
            format!("[?] {}", hint_button_label(view.next_hint)),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Line::from(format!("Hints used: {}", view.hint_usage_count)),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Hint ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<P: WordProvider, R: RandomSource>(f: &mut Frame, app: &App<P, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<P: WordProvider, R: RandomSource>(
    f: &mut Frame,
    app: &App<P, R>,
    view: &RoundView,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let round = Paragraph::new(format!("Round: {}", view.outcome)).alignment(Alignment::Center);
    f.render_widget(round, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if view.outcome.is_terminal() {
        "Esc: Quit | Enter/F2: New Game"
    } else {
        "A-Z: Guess | ?/Tab: Hint | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
