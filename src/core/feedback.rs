//! Feedback calculation for a guess against the hidden word
//!
//! Each position is scored independently:
//! - Correct if the guessed letter matches the hidden letter at that position
//! - Present if the guessed letter appears anywhere else in the hidden word
//! - Absent otherwise
//!
//! There is no per-letter budget, so a guess with a repeated letter can get
//! more Present marks than the hidden word has copies of that letter. Agents
//! trained on this environment see exactly this rule.

use super::{Status, WORD_LENGTH, Word};

/// Per-position feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Status; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const PERFECT: Self = Self([Status::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(statuses: [Status; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Score `guess` against `hidden`
    ///
    /// # Examples
    /// ```
    /// use wordle_gym::core::{Feedback, Status, Word};
    ///
    /// let hidden = Word::new("abase").unwrap();
    /// let guess = Word::new("aback").unwrap();
    /// let feedback = Feedback::score(&hidden, &guess);
    ///
    /// assert_eq!(
    ///     feedback.statuses(),
    ///     &[Status::Correct, Status::Correct, Status::Correct, Status::Absent, Status::Absent]
    /// );
    /// ```
    #[must_use]
    pub fn score(hidden: &Word, guess: &Word) -> Self {
        let mut statuses = [Status::Absent; WORD_LENGTH];

        for ((status, &h), &g) in statuses
            .iter_mut()
            .zip(hidden.letters())
            .zip(guess.letters())
        {
            *status = if g == h {
                Status::Correct
            } else if hidden.has_letter(g) {
                Status::Present
            } else {
                Status::Absent
            };
        }

        Self(statuses)
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[Status; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is Correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&s| s == Status::Correct)
    }

    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|status| match status {
                Status::Correct => '🟩',
                Status::Present => '🟨',
                Status::Absent => '⬜',
                Status::Unknown => '⬛',
            })
            .collect()
    }
}
