//! Action and observation space descriptions
//!
//! Agents use these to size their inputs and outputs and to sample actions.

use super::board::Observation;
use crate::core::{ALPHABET_SIZE, GAME_LENGTH, Status, WORD_LENGTH};
use rand::Rng;

/// Multi-discrete action space: one letter index in `0..26` per position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSpec {
    nvec: [u8; WORD_LENGTH],
}

impl Default for ActionSpec {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionSpec {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nvec: [ALPHABET_SIZE as u8; WORD_LENGTH],
        }
    }

    /// Number of choices per position
    #[inline]
    #[must_use]
    pub const fn nvec(&self) -> &[u8; WORD_LENGTH] {
        &self.nvec
    }

    /// Check that an action has the right length and every component is in range
    #[must_use]
    pub fn contains(&self, action: &[u8]) -> bool {
        action.len() == self.nvec.len() && action.iter().zip(&self.nvec).all(|(&a, &n)| a < n)
    }

    /// Sample an action uniformly; the result is usually not a real word
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [u8; WORD_LENGTH] {
        self.nvec.map(|n| rng.random_range(0..n))
    }
}

/// Observation space: a 6x5 board and a 26-entry alphabet, codes in `-1..=2`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationSpec {
    pub board_shape: (usize, usize),
    pub alphabet_len: usize,
    pub low: i8,
    pub high: i8,
}

impl Default for ObservationSpec {
    fn default() -> Self {
        Self::new()
    }
}

impl ObservationSpec {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            board_shape: (GAME_LENGTH, WORD_LENGTH),
            alphabet_len: ALPHABET_SIZE,
            low: Status::MIN_CODE,
            high: Status::MAX_CODE,
        }
    }

    /// Check that every code lies in `low..=high` and that each board row is
    /// either fully written or fully unknown
    #[must_use]
    pub fn contains(&self, observation: &Observation) -> bool {
        let in_range = |code: i8| (self.low..=self.high).contains(&code);

        let board = observation.board.to_codes();
        let rows_ok = board.iter().all(|row| {
            row.iter().all(|&c| in_range(c))
                && (row.iter().all(|&c| c == -1) || row.iter().all(|&c| c != -1))
        });

        rows_ok && observation.alphabet.to_codes().iter().all(|&c| in_range(c))
    }
}
