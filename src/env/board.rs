//! Board history, alphabet tracker and the observation snapshot

use crate::core::{ALPHABET_SIZE, Feedback, GAME_LENGTH, Status, WORD_LENGTH, Word};

/// Guess/feedback history: one row per turn
///
/// Rows start Unknown and are written exactly once, in turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    rows: [[Status; WORD_LENGTH]; GAME_LENGTH],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: [[Status::Unknown; WORD_LENGTH]; GAME_LENGTH],
        }
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[[Status; WORD_LENGTH]; GAME_LENGTH] {
        &self.rows
    }

    /// Get a single row
    ///
    /// # Panics
    /// Panics if `index >= GAME_LENGTH`
    #[inline]
    #[must_use]
    pub const fn row(&self, index: usize) -> &[Status; WORD_LENGTH] {
        &self.rows[index]
    }

    /// Number of rows that hold feedback
    #[must_use]
    pub fn filled_rows(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.iter().any(|s| s.is_known()))
            .count()
    }

    pub(crate) fn write_row(&mut self, index: usize, feedback: &Feedback) {
        debug_assert!(
            self.rows[index].iter().all(|&s| s == Status::Unknown),
            "board row {index} written twice"
        );
        self.rows[index] = *feedback.statuses();
    }

    /// Integer encoding, -1..=2 per cell
    #[must_use]
    pub fn to_codes(&self) -> [[i8; WORD_LENGTH]; GAME_LENGTH] {
        self.rows.map(|row| row.map(Status::code))
    }
}

/// Latest observed status for each letter of the alphabet
///
/// Every accepted guess overwrites the entry of each letter it contains,
/// left to right. That means the rightmost copy of a repeated letter wins,
/// and a later turn replaces an earlier one even when the earlier status
/// was better (Correct can regress to Present or Absent).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphabetKnowledge {
    letters: [Status; ALPHABET_SIZE],
}

impl Default for AlphabetKnowledge {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphabetKnowledge {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: [Status::Unknown; ALPHABET_SIZE],
        }
    }

    /// Status for a letter index
    ///
    /// # Panics
    /// Panics if `letter >= 26`
    #[inline]
    #[must_use]
    pub const fn get(&self, letter: u8) -> Status {
        self.letters[letter as usize]
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Status; ALPHABET_SIZE] {
        &self.letters
    }

    pub(crate) fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &status) in guess.letters().iter().zip(feedback.statuses()) {
            self.letters[usize::from(letter)] = status;
        }
    }

    /// Integer encoding, -1..=2 per letter
    #[must_use]
    pub fn to_codes(&self) -> [i8; ALPHABET_SIZE] {
        self.letters.map(Status::code)
    }
}

/// What an agent sees after `reset` and `step`
///
/// This is an owned copy; changing it has no effect on the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Observation {
    pub board: Board,
    pub alphabet: AlphabetKnowledge,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> u8 {
        c as u8 - b'a'
    }

    #[test]
    fn new_board_is_unknown() {
        let board = Board::new();
        assert_eq!(board.filled_rows(), 0);
        assert!(board.to_codes().iter().flatten().all(|&c| c == -1));
    }

    #[test]
    fn write_row_fills_in_order() {
        let mut board = Board::new();
        let hidden = Word::new("abase").unwrap();
        let guess = Word::new("aback").unwrap();
        board.write_row(0, &Feedback::score(&hidden, &guess));

        assert_eq!(board.filled_rows(), 1);
        assert_eq!(board.to_codes()[0], [2, 2, 2, 0, 0]);
        assert_eq!(board.row(1), &[Status::Unknown; WORD_LENGTH]);
    }

    #[test]
    fn alphabet_rightmost_repeat_wins() {
        // civic vs chili: the first c is Correct, the last c is only Present
        let hidden = Word::new("chili").unwrap();
        let guess = Word::new("civic").unwrap();
        let feedback = Feedback::score(&hidden, &guess);
        assert_eq!(feedback.statuses()[0], Status::Correct);
        assert_eq!(feedback.statuses()[4], Status::Present);

        let mut alphabet = AlphabetKnowledge::new();
        alphabet.record(&guess, &feedback);
        assert_eq!(alphabet.get(letter('c')), Status::Present);
        assert_eq!(alphabet.get(letter('v')), Status::Absent);
        assert_eq!(alphabet.get(letter('z')), Status::Unknown);
    }

    #[test]
    fn alphabet_later_turn_overwrites_even_when_worse() {
        let hidden = Word::new("abase").unwrap();
        let mut alphabet = AlphabetKnowledge::new();

        let first = Word::new("aback").unwrap();
        alphabet.record(&first, &Feedback::score(&hidden, &first));
        assert_eq!(alphabet.get(letter('b')), Status::Correct);

        // b at position 0 of "bathe" is not where "abase" has it
        let second = Word::new("bathe").unwrap();
        alphabet.record(&second, &Feedback::score(&hidden, &second));
        assert_eq!(alphabet.get(letter('b')), Status::Present);
    }

    #[test]
    fn observation_is_a_copy() {
        let mut observation = Observation::default();
        let snapshot = observation;
        observation.alphabet.letters[0] = Status::Correct;
        assert_eq!(snapshot.alphabet.get(0), Status::Unknown);
    }
}
