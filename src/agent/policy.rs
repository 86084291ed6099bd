//! Guess selection policies
//!
//! Defines the Policy trait and the concrete policies the driver can run.

use crate::core::{Feedback, WORD_LENGTH, Word};
use crate::env::ActionSpec;
use crate::wordlists::WordBank;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// A policy picks the next action from the feedback seen so far
pub trait Policy {
    /// Choose an action
    ///
    /// `history` holds the accepted guesses of the current episode with their
    /// feedback. The result may be rejected by the environment; the driver
    /// then calls `act` again for the same turn.
    fn act(&mut self, history: &[(Word, Feedback)], rng: &mut StdRng) -> [u8; WORD_LENGTH];
}

/// Enum wrapper for all policy types
///
/// Allows runtime selection of a policy while keeping static dispatch.
pub enum PolicyType<'a> {
    RandomLetters(RandomLetters),
    RandomWord(RandomWord<'a>),
    Consistent(Consistent<'a>),
}

impl Policy for PolicyType<'_> {
    fn act(&mut self, history: &[(Word, Feedback)], rng: &mut StdRng) -> [u8; WORD_LENGTH] {
        match self {
            Self::RandomLetters(p) => p.act(history, rng),
            Self::RandomWord(p) => p.act(history, rng),
            Self::Consistent(p) => p.act(history, rng),
        }
    }
}

impl<'a> PolicyType<'a> {
    /// Names accepted by [`PolicyType::from_name`]
    pub const NAMES: [&'static str; 3] = ["random-letters", "random-word", "consistent"];

    /// Create a policy from its name
    ///
    /// Returns `None` for an unrecognized name.
    #[must_use]
    pub fn from_name(name: &str, bank: &'a WordBank) -> Option<Self> {
        match name {
            "random-letters" | "letters" => Some(Self::RandomLetters(RandomLetters::new())),
            "random-word" | "random" => Some(Self::RandomWord(RandomWord::new(bank))),
            "consistent" => Some(Self::Consistent(Consistent::new(bank))),
            _ => None,
        }
    }
}

/// Samples the action space uniformly, like an untrained agent
///
/// Nearly every sample is rejected as an invalid word, which exercises the
/// driver's retry loop.
#[derive(Debug, Default)]
pub struct RandomLetters {
    space: ActionSpec,
}

impl RandomLetters {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            space: ActionSpec::new(),
        }
    }
}

impl Policy for RandomLetters {
    fn act(&mut self, _history: &[(Word, Feedback)], rng: &mut StdRng) -> [u8; WORD_LENGTH] {
        self.space.sample(rng)
    }
}

/// Picks any bank word uniformly, ignoring feedback
pub struct RandomWord<'a> {
    bank: &'a WordBank,
}

impl<'a> RandomWord<'a> {
    #[must_use]
    pub const fn new(bank: &'a WordBank) -> Self {
        Self { bank }
    }
}

impl Policy for RandomWord<'_> {
    fn act(&mut self, _history: &[(Word, Feedback)], rng: &mut StdRng) -> [u8; WORD_LENGTH] {
        *self.bank.sample(rng).letters()
    }
}

/// Picks uniformly among bank words that would have produced every feedback
/// seen so far
///
/// The hidden word always stays in the candidate set, because the filter
/// uses the same scoring rule as the environment.
pub struct Consistent<'a> {
    bank: &'a WordBank,
}

impl<'a> Consistent<'a> {
    #[must_use]
    pub const fn new(bank: &'a WordBank) -> Self {
        Self { bank }
    }

    /// Bank words consistent with the history
    #[must_use]
    pub fn candidates(&self, history: &[(Word, Feedback)]) -> Vec<&'a Word> {
        self.bank
            .iter()
            .filter(|&candidate| {
                history
                    .iter()
                    .all(|(guess, observed)| Feedback::score(candidate, guess) == *observed)
            })
            .collect()
    }
}

impl Policy for Consistent<'_> {
    fn act(&mut self, history: &[(Word, Feedback)], rng: &mut StdRng) -> [u8; WORD_LENGTH] {
        let candidates = self.candidates(history);
        let pick = candidates
            .choose(rng)
            .copied()
            // Fallback: feedback came from a different word list
            .unwrap_or_else(|| self.bank.sample(rng));
        *pick.letters()
    }
}
