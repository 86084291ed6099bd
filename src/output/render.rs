//! Colored terminal rendering of an episode
//!
//! Shows every accepted guess with its letters colored by feedback, then the
//! alphabet colored by the tracker. Read-only: takes the session by reference.

use crate::core::{ALPHABET_SIZE, Status, letter_to_char};
use crate::env::GameSession;
use colored::{ColoredString, Colorize};
use std::fmt::Write;

const RULE_WIDTH: usize = 51;

/// Color one letter by its status
#[must_use]
pub fn colorize_letter(letter: char, status: Status) -> ColoredString {
    let text = letter.to_string();
    match status {
        Status::Absent => text.bright_black().bold(),
        Status::Present => text.bright_yellow().bold(),
        Status::Correct => text.bright_green().bold(),
        Status::Unknown => text.normal(),
    }
}

/// Render guess history and alphabet knowledge
#[must_use]
pub fn render_session(session: &GameSession) -> String {
    let rule = "#".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    for (guess, feedback) in session.history() {
        for (&letter, &status) in guess.letters().iter().zip(feedback.statuses()) {
            let _ = write!(out, "{} ", colorize_letter(letter_to_char(letter), status));
        }
        out.push('\n');
    }
    out.push('\n');

    let alphabet = session.alphabet();
    for letter in 0..ALPHABET_SIZE as u8 {
        let _ = write!(
            out,
            "{} ",
            colorize_letter(letter_to_char(letter), alphabet.get(letter))
        );
    }
    out.push('\n');
    let _ = writeln!(out, "{rule}");

    out
}
