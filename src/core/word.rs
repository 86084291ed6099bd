//! Word representation and codec
//!
//! A `Word` stores five letters as indices in `0..26`, the same encoding the
//! environment uses for actions.

use super::{ALPHABET_SIZE, WORD_LENGTH};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A five-letter word encoded as letter indices (`a` = 0 .. `z` = 25)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid character {character:?} at position {position}, expected a-z")]
    InvalidCharacter { position: usize, character: char },

    #[error("letter {value} at position {position} is outside 0..26")]
    LetterOutOfRange { position: usize, value: u8 },
}

impl Word {
    /// Encode a string into a Word
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is not exactly 5 characters long
    /// - Any character is outside `a..=z` (uppercase is rejected)
    ///
    /// # Examples
    /// ```
    /// use wordle_gym::core::Word;
    ///
    /// let word = Word::new("aback").unwrap();
    /// assert_eq!(word.letters(), &[0, 1, 0, 2, 10]);
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("ABACK").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let actual = text.chars().count();
        if actual != WORD_LENGTH {
            return Err(WordError::InvalidLength {
                expected: WORD_LENGTH,
                actual,
            });
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (position, (slot, character)) in letters.iter_mut().zip(text.chars()).enumerate() {
            if !character.is_ascii_lowercase() {
                return Err(WordError::InvalidCharacter {
                    position,
                    character,
                });
            }
            *slot = character as u8 - b'a';
        }

        Ok(Self { letters })
    }

    /// Build a Word from raw letter indices, as submitted by an agent
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the slice is not 5 long, or
    /// `WordError::LetterOutOfRange` if any component is 26 or above.
    pub fn from_letters(letters: &[u8]) -> Result<Self, WordError> {
        let letters: [u8; WORD_LENGTH] = letters.try_into().map_err(|_| WordError::InvalidLength {
            expected: WORD_LENGTH,
            actual: letters.len(),
        })?;

        if let Some((position, &value)) = letters
            .iter()
            .enumerate()
            .find(|&(_, &value)| usize::from(value) >= ALPHABET_SIZE)
        {
            return Err(WordError::LetterOutOfRange { position, value });
        }

        Ok(Self { letters })
    }

    /// Get the letter indices
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter index at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Decode the word back into its lowercase string
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|&l| letter_to_char(l)).collect()
    }
}

/// Map a letter index to its character
#[inline]
#[must_use]
pub const fn letter_to_char(letter: u8) -> char {
    (b'a' + letter) as char
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.letters {
            write!(f, "{}", letter_to_char(letter))?;
        }
        Ok(())
    }
}
