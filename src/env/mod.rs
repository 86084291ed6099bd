//! Turn-based Wordle environment
//!
//! `WordleEnv` implements the [`Environment`] contract: `reset` starts an
//! episode with a random hidden word, `step` submits a guess and returns the
//! new observation, the reward and whether the episode is over.

mod board;
mod error;
mod session;
mod spaces;
mod wordle;

pub use board::{AlphabetKnowledge, Board, Observation};
pub use error::EnvError;
pub use session::{GameSession, Phase};
pub use spaces::{ActionSpec, ObservationSpec};
pub use wordle::WordleEnv;

/// Reward for guessing the hidden word
pub const REWARD_WIN: f32 = 1.0;

/// Reward for running out of turns
pub const REWARD_LOSS: f32 = -1.0;

/// Reward for any other accepted guess
pub const REWARD_STEP: f32 = 0.0;

/// Result of one accepted step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step<O> {
    pub observation: O,
    pub reward: f32,
    pub terminal: bool,
}

/// The reset/step contract agents are written against
pub trait Environment {
    type Observation;

    /// Start a new episode and return the initial observation
    fn reset(&mut self) -> Self::Observation;

    /// Submit an action
    ///
    /// # Errors
    ///
    /// Implementations return an error instead of mutating state when the
    /// action cannot be applied.
    fn step(&mut self, action: &[u8]) -> Result<Step<Self::Observation>, EnvError>;

    fn observation_spec(&self) -> ObservationSpec;

    fn action_spec(&self) -> ActionSpec;
}
