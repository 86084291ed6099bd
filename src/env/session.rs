//! State of a single episode

use super::board::{AlphabetKnowledge, Board, Observation};
use crate::core::{Feedback, GAME_LENGTH, Word};
use std::fmt;

/// Lifecycle of an environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No episode started yet
    Ready,
    InProgress,
    Won,
    Lost,
}

impl Phase {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ready => "ready",
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// One episode: hidden word, board, alphabet tracker and guess history
///
/// Created by `WordleEnv::reset` and replaced by the next reset. Guesses are
/// validated by the environment before they reach the session.
#[derive(Debug, Clone)]
pub struct GameSession {
    hidden: Word,
    turns_remaining: usize,
    board: Board,
    alphabet: AlphabetKnowledge,
    guesses: Vec<Word>,
    phase: Phase,
}

impl GameSession {
    #[must_use]
    pub fn new(hidden: Word) -> Self {
        Self {
            hidden,
            turns_remaining: GAME_LENGTH,
            board: Board::new(),
            alphabet: AlphabetKnowledge::new(),
            guesses: Vec::with_capacity(GAME_LENGTH),
            phase: Phase::InProgress,
        }
    }

    /// Resolve one accepted guess
    ///
    /// Writes the next board row, overwrites the alphabet entries of every
    /// guessed letter, consumes a turn and moves to `Won` or `Lost` when the
    /// episode ends.
    pub(crate) fn apply_guess(&mut self, guess: Word) -> Feedback {
        debug_assert_eq!(self.phase, Phase::InProgress);

        let feedback = Feedback::score(&self.hidden, &guess);
        let row = GAME_LENGTH - self.turns_remaining;

        self.board.write_row(row, &feedback);
        self.alphabet.record(&guess, &feedback);
        self.turns_remaining -= 1;
        self.guesses.push(guess);

        self.phase = if feedback.is_win() {
            Phase::Won
        } else if self.turns_remaining > 0 {
            Phase::InProgress
        } else {
            Phase::Lost
        };

        feedback
    }

    #[inline]
    #[must_use]
    pub const fn hidden_word(&self) -> &Word {
        &self.hidden
    }

    #[inline]
    #[must_use]
    pub const fn turns_remaining(&self) -> usize {
        self.turns_remaining
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &AlphabetKnowledge {
        &self.alphabet
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Accepted guesses paired with the feedback they received
    pub fn history(&self) -> impl Iterator<Item = (Word, Feedback)> + '_ {
        self.guesses
            .iter()
            .zip(self.board.rows())
            .map(|(&guess, &row)| (guess, Feedback::new(row)))
    }

    #[must_use]
    pub const fn observation(&self) -> Observation {
        Observation {
            board: self.board,
            alphabet: self.alphabet,
        }
    }
}
