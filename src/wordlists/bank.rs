//! The set of valid words for an environment
//!
//! A `WordBank` is built once, validated up front, and then only read. It is
//! shared by reference between every environment that plays from it.

use super::WORDS;
use crate::core::{Word, WordError};
use rand::Rng;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Errors raised while building a `WordBank`
#[derive(Debug, Error)]
pub enum WordBankError {
    #[error("word list contains no words")]
    Empty,

    #[error("malformed word on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: WordError,
    },

    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// Immutable, non-empty set of valid words
///
/// Words keep the order they were first seen in, so sampling with a seeded
/// RNG is reproducible for a given list.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordBank {
    /// Build a bank from lines of text, one word per line
    ///
    /// Lines are trimmed; every line must then be a word, so a blank line is
    /// malformed. Repeated words are kept once.
    ///
    /// # Errors
    ///
    /// Returns `WordBankError::Malformed` with the 1-based line number of the
    /// first line that is not a valid word, or `WordBankError::Empty` if no
    /// words remain.
    ///
    /// # Examples
    /// ```
    /// use wordle_gym::wordlists::WordBank;
    ///
    /// let bank = WordBank::from_lines(["aback", "abase"]).unwrap();
    /// assert_eq!(bank.len(), 2);
    ///
    /// assert!(WordBank::from_lines(["aback", "oops"]).is_err());
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Result<Self, WordBankError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();

        for (i, line) in lines.into_iter().enumerate() {
            let word = Word::new(line.as_ref().trim())
                .map_err(|source| WordBankError::Malformed { line: i + 1, source })?;

            if index.insert(word) {
                words.push(word);
            }
        }

        if words.is_empty() {
            return Err(WordBankError::Empty);
        }

        Ok(Self { words, index })
    }

    /// Build a bank from the word list compiled into the binary
    ///
    /// # Errors
    ///
    /// Only fails if the embedded list itself is malformed.
    pub fn embedded() -> Result<Self, WordBankError> {
        Self::from_lines(WORDS.iter().copied())
    }

    /// Exact membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Pick a word uniformly at random
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed bank
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}
