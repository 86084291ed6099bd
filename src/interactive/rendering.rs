//! TUI rendering with ratatui
//!
//! Draws the guess board, the keyboard of letter knowledge and the game status.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GAME_LENGTH, Status, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Board
            Constraint::Percentage(55), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

/// Background color for a tile in the given state
fn status_style(status: Status) -> Style {
    let base = Style::new().add_modifier(Modifier::BOLD);
    match status {
        Status::Correct => base.fg(Color::Black).bg(Color::Green),
        Status::Present => base.fg(Color::Black).bg(Color::Yellow),
        Status::Absent => base.fg(Color::White).bg(Color::DarkGray),
        Status::Unknown => base.fg(Color::White),
    }
}

fn tile(c: char, status: Status) -> Span<'static> {
    Span::styled(format!(" {} ", c.to_ascii_uppercase()), status_style(status))
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::with_capacity(GAME_LENGTH * 2);

    if let Some(session) = app.env.session() {
        for (guess, feedback) in session.history() {
            let spans: Vec<Span> = guess
                .text()
                .chars()
                .zip(feedback.statuses())
                .flat_map(|(c, &status)| [tile(c, status), Span::raw(" ")])
                .collect();
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }
    }

    // Row being typed
    if app.input_mode == InputMode::Guessing && lines.len() < GAME_LENGTH * 2 {
        let typed: Vec<char> = app.input_buffer.chars().collect();
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|i| {
                let c = typed.get(i).copied().unwrap_or('_');
                [tile(c, Status::Unknown), Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    while lines.len() < GAME_LENGTH * 2 {
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|_| {
                [
                    Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Turns gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_turns(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let observation = app.env.observation();
    let alphabet = observation.alphabet.letters();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|b| tile(char::from(b), alphabet[usize::from(b - b'a')]))
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_turns(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.turns_remaining();
    let used = GAME_LENGTH - remaining;
    let percent = u16::try_from(used * 100 / GAME_LENGTH).unwrap_or(100);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{GAME_LENGTH} guesses used"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => (
            " Type a 5-letter word | Enter to submit ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
        InputMode::GameOver => (
            " Game over | Enter for a new game, Esc to quit ",
            String::new(),
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let phase = Paragraph::new(format!("Game: {}", app.env.phase())).alignment(Alignment::Center);
    f.render_widget(phase, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let distribution = app
        .stats
        .guess_distribution
        .iter()
        .enumerate()
        .map(|(i, n)| format!("{}:{n}", i + 1))
        .collect::<Vec<_>>()
        .join(" ");
    let dist = Paragraph::new(distribution).alignment(Alignment::Center);
    f.render_widget(dist, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New Game")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
