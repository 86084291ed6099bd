//! Error types for environment operations

use super::session::Phase;
use crate::core::WordError;
use thiserror::Error;

/// Errors returned by `reset`/`step`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// Action is not five letter indices in `0..26`
    #[error("action is not a well-formed word: {0}")]
    InvalidActionShape(#[from] WordError),

    /// Well-formed action that is not in the word bank; no turn is consumed
    #[error("{word} is not a valid word")]
    InvalidWord { word: String },

    /// Operation not allowed in the current phase
    #[error("cannot {operation} while the episode is {phase}")]
    InvalidState {
        phase: Phase,
        operation: &'static str,
    },
}

impl EnvError {
    /// True if the caller can simply retry with another action
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidWord { .. })
    }
}
