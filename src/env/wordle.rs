//! The Wordle episode controller

use super::board::Observation;
use super::error::EnvError;
use super::session::{GameSession, Phase};
use super::spaces::{ActionSpec, ObservationSpec};
use super::{Environment, REWARD_LOSS, REWARD_STEP, REWARD_WIN, Step};
use crate::core::Word;
use crate::wordlists::WordBank;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Wordle environment over a shared word bank
///
/// # Examples
/// ```
/// use wordle_gym::core::Word;
/// use wordle_gym::env::{Environment, WordleEnv};
/// use wordle_gym::wordlists::WordBank;
///
/// let bank = WordBank::from_lines(["abase"]).unwrap();
/// let mut env = WordleEnv::with_seed(&bank, 1);
/// env.reset();
///
/// let guess = Word::new("abase").unwrap();
/// let step = env.step(guess.letters()).unwrap();
/// assert_eq!(step.reward, 1.0);
/// assert!(step.terminal);
/// ```
#[derive(Debug)]
pub struct WordleEnv<'a> {
    bank: &'a WordBank,
    rng: StdRng,
    session: Option<GameSession>,
}

impl<'a> WordleEnv<'a> {
    /// Create an environment seeded from the operating system
    #[must_use]
    pub fn new(bank: &'a WordBank) -> Self {
        Self {
            bank,
            rng: StdRng::from_os_rng(),
            session: None,
        }
    }

    /// Create an environment with a reproducible sequence of hidden words
    #[must_use]
    pub fn with_seed(bank: &'a WordBank, seed: u64) -> Self {
        Self {
            bank,
            rng: StdRng::seed_from_u64(seed),
            session: None,
        }
    }

    /// Reseed the hidden-word RNG, then reset
    pub fn reset_with_seed(&mut self, seed: u64) -> Observation {
        self.rng = StdRng::seed_from_u64(seed);
        self.reset()
    }

    /// Submit a guess as a `Word`
    ///
    /// # Errors
    ///
    /// Same as [`Environment::step`], minus the shape check.
    pub fn step_word(&mut self, guess: &Word) -> Result<Step<Observation>, EnvError> {
        self.step(guess.letters())
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.as_ref().map_or(Phase::Ready, GameSession::phase)
    }

    /// Current episode, if `reset` has been called
    #[must_use]
    pub const fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Snapshot of the current observation (all Unknown before the first reset)
    #[must_use]
    pub fn observation(&self) -> Observation {
        self.session
            .as_ref()
            .map(GameSession::observation)
            .unwrap_or_default()
    }
}

impl Environment for WordleEnv<'_> {
    type Observation = Observation;

    fn reset(&mut self) -> Observation {
        let hidden = *self.bank.sample(&mut self.rng);
        log::debug!("reset: new episode over {} words", self.bank.len());
        log::trace!("reset: hidden word is {hidden}");

        let session = GameSession::new(hidden);
        let observation = session.observation();
        self.session = Some(session);
        observation
    }

    /// Submit a guess
    ///
    /// Checks run in order: the episode must be in progress, the action must
    /// be five letters in `0..26`, and the word must be in the bank. A failed
    /// check leaves the episode untouched.
    fn step(&mut self, action: &[u8]) -> Result<Step<Observation>, EnvError> {
        let phase = self.phase();
        let Some(session) = self
            .session
            .as_mut()
            .filter(|s| s.phase() == Phase::InProgress)
        else {
            return Err(EnvError::InvalidState {
                phase,
                operation: "step",
            });
        };

        let guess = Word::from_letters(action)?;
        if !self.bank.contains(&guess) {
            return Err(EnvError::InvalidWord { word: guess.text() });
        }

        let feedback = session.apply_guess(guess);
        let phase = session.phase();
        let reward = match phase {
            Phase::Won => REWARD_WIN,
            Phase::Lost => REWARD_LOSS,
            Phase::Ready | Phase::InProgress => REWARD_STEP,
        };

        log::debug!(
            "step: {guess} {} ({} turns left, {phase})",
            feedback.to_emoji(),
            session.turns_remaining()
        );

        Ok(Step {
            observation: session.observation(),
            reward,
            terminal: phase.is_terminal(),
        })
    }

    fn observation_spec(&self) -> ObservationSpec {
        ObservationSpec::new()
    }

    fn action_spec(&self) -> ActionSpec {
        ActionSpec::new()
    }
}
