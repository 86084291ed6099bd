//! Wordle Gym
//!
//! A Wordle game exposed as a reinforcement-learning environment: reset,
//! step with a five-letter action, and observe a board of per-letter
//! feedback plus the latest knowledge about every letter of the alphabet.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_gym::core::{Feedback, Status, Word};
//!
//! let hidden = Word::new("abase").unwrap();
//! let guess = Word::new("aback").unwrap();
//!
//! let feedback = Feedback::score(&hidden, &guess);
//! assert_eq!(feedback.statuses()[0], Status::Correct);
//! assert_eq!(feedback.statuses()[4], Status::Absent);
//! ```

// Core domain types
pub mod core;

// Environment state machine
pub mod env;

// Word lists
pub mod wordlists;

// Guess policies
pub mod agent;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
