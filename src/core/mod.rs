//! Core domain types for the Wordle environment
//!
//! This module contains the word codec, the per-letter status codes and the
//! feedback rule. Everything here is pure and has no I/O.

mod feedback;
mod status;
mod word;

pub use feedback::Feedback;
pub use status::Status;
pub use word::{Word, WordError, letter_to_char};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of guesses allowed per episode
pub const GAME_LENGTH: usize = 6;

/// Number of letters in the alphabet (`a`..=`z`)
pub const ALPHABET_SIZE: usize = 26;
