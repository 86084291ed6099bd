//! Episode driver
//!
//! Plays episodes with a policy. Invalid-word rejections are retried on the
//! same turn without consuming it; any other error ends the run.

use crate::agent::{Policy, PolicyType};
use crate::core::{Feedback, GAME_LENGTH, Word};
use crate::env::{Environment, WordleEnv};
use crate::output::render::render_session;
use crate::wordlists::WordBank;
use anyhow::{Context, Result, anyhow, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Default cap on consecutive invalid words for a single turn
pub const DEFAULT_MAX_ATTEMPTS: usize = 5_000_000;

/// Mixed into episode seeds so the policy RNG differs from the hidden-word RNG
pub(crate) const POLICY_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Configuration for a simulation run
pub struct SimulateConfig {
    pub policy: String,
    pub episodes: usize,
    pub seed: Option<u64>,
    pub render: bool,
    pub max_attempts: usize,
}

impl SimulateConfig {
    #[must_use]
    pub const fn new(policy: String) -> Self {
        Self {
            policy,
            episodes: 1,
            seed: None,
            render: true,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Result of one episode
#[derive(Debug, Clone)]
pub struct EpisodeResult {
    pub hidden: Word,
    pub guesses: Vec<(Word, Feedback)>,
    pub reward: f32,
    pub won: bool,
    pub invalid_attempts: usize,
}

impl EpisodeResult {
    #[must_use]
    pub fn turns(&self) -> usize {
        self.guesses.len()
    }
}

/// Play one episode to the end
///
/// # Errors
///
/// Returns an error if the policy produces `max_attempts` invalid words in a
/// row for one turn, or if the environment rejects an action for any reason
/// other than an unknown word.
pub fn run_episode<P: Policy>(
    env: &mut WordleEnv<'_>,
    policy: &mut P,
    rng: &mut StdRng,
    max_attempts: usize,
    render: bool,
) -> Result<EpisodeResult> {
    env.reset();
    let hidden = env
        .session()
        .map(|s| *s.hidden_word())
        .context("reset did not start an episode")?;

    let mut guesses: Vec<(Word, Feedback)> = Vec::with_capacity(GAME_LENGTH);
    let mut invalid_attempts = 0;

    loop {
        let mut attempts = 0;
        let (action, step) = loop {
            let action = policy.act(&guesses, rng);
            match env.step(&action) {
                Ok(step) => break (action, step),
                Err(err) if err.is_recoverable() => {
                    log::trace!("retrying turn {}: {err}", guesses.len() + 1);
                    attempts += 1;
                    invalid_attempts += 1;
                    if attempts >= max_attempts {
                        log::warn!(
                            "giving up on turn {} after {attempts} invalid words",
                            guesses.len() + 1
                        );
                        bail!(
                            "policy produced {attempts} invalid words in a row on turn {}",
                            guesses.len() + 1
                        );
                    }
                }
                Err(err) => return Err(err.into()),
            }
        };

        let guess = Word::from_letters(&action)?;
        let feedback = Feedback::new(*step.observation.board.row(guesses.len()));
        guesses.push((guess, feedback));

        if render && let Some(session) = env.session() {
            print!("{}", render_session(session));
            println!();
        }

        if step.terminal {
            return Ok(EpisodeResult {
                hidden,
                guesses,
                reward: step.reward,
                won: feedback.is_win(),
                invalid_attempts,
            });
        }
    }
}

/// Play `config.episodes` episodes one after another
///
/// # Errors
///
/// Returns an error for an unknown policy name or a failed episode.
pub fn run_simulation(config: &SimulateConfig, bank: &WordBank) -> Result<Vec<EpisodeResult>> {
    let mut policy = PolicyType::from_name(&config.policy, bank).ok_or_else(|| {
        anyhow!(
            "unknown policy '{}', expected one of: {}",
            config.policy,
            PolicyType::NAMES.join(", ")
        )
    })?;

    let (mut env, mut rng) = match config.seed {
        Some(seed) => (
            WordleEnv::with_seed(bank, seed),
            StdRng::seed_from_u64(seed ^ POLICY_SEED_SALT),
        ),
        None => (WordleEnv::new(bank), StdRng::from_os_rng()),
    };

    let mut results = Vec::with_capacity(config.episodes);
    for episode in 1..=config.episodes {
        let result = run_episode(
            &mut env,
            &mut policy,
            &mut rng,
            config.max_attempts,
            config.render,
        )
        .with_context(|| format!("episode {episode} failed"))?;

        log::info!(
            "episode {episode}: {} in {} turns (reward {})",
            if result.won { "won" } else { "lost" },
            result.turns(),
            result.reward
        );
        results.push(result);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{Consistent, RandomLetters, RandomWord};
    use crate::env::{REWARD_LOSS, REWARD_WIN};

    fn bank() -> WordBank {
        WordBank::from_lines(["aback", "abase", "abate", "crane", "fuzzy"]).unwrap()
    }

    /// Replays a fixed script of actions
    struct Scripted(Vec<[u8; 5]>);

    impl Policy for Scripted {
        fn act(&mut self, _history: &[(Word, Feedback)], _rng: &mut StdRng) -> [u8; 5] {
            self.0.remove(0)
        }
    }

    fn letters(text: &str) -> [u8; 5] {
        *Word::new(text).unwrap().letters()
    }

    #[test]
    fn episode_reaches_terminal() {
        let bank = bank();
        let mut env = WordleEnv::with_seed(&bank, 3);
        let mut policy = RandomWord::new(&bank);
        let mut rng = StdRng::seed_from_u64(3);

        let result = run_episode(&mut env, &mut policy, &mut rng, 10, false).unwrap();
        assert!(result.turns() >= 1 && result.turns() <= GAME_LENGTH);
        assert_eq!(result.won, result.reward == REWARD_WIN);
        if !result.won {
            assert_eq!(result.turns(), GAME_LENGTH);
            assert_eq!(result.reward, REWARD_LOSS);
        }
        assert_eq!(result.invalid_attempts, 0);
    }

    #[test]
    fn invalid_words_do_not_consume_turns() {
        let bank = WordBank::from_lines(["abase"]).unwrap();
        let mut env = WordleEnv::with_seed(&bank, 0);
        let mut policy = Scripted(vec![letters("zzzzz"), letters("qqqqq"), letters("abase")]);
        let mut rng = StdRng::seed_from_u64(0);

        let result = run_episode(&mut env, &mut policy, &mut rng, 10, false).unwrap();
        assert!(result.won);
        assert_eq!(result.turns(), 1);
        assert_eq!(result.invalid_attempts, 2);
        assert_eq!(result.hidden, Word::new("abase").unwrap());
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let bank = WordBank::from_lines(["abase"]).unwrap();
        let mut env = WordleEnv::with_seed(&bank, 0);
        let mut policy = Scripted(vec![letters("zzzzz"); 3]);
        let mut rng = StdRng::seed_from_u64(0);

        let err = run_episode(&mut env, &mut policy, &mut rng, 3, false).unwrap_err();
        assert!(err.to_string().contains("3 invalid words"));
    }

    #[test]
    fn malformed_action_is_fatal() {
        let bank = WordBank::from_lines(["abase"]).unwrap();
        let mut env = WordleEnv::with_seed(&bank, 0);
        let mut policy = Scripted(vec![[0, 1, 0, 18, 40]]);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(run_episode(&mut env, &mut policy, &mut rng, 10, false).is_err());
    }

    #[test]
    fn consistent_policy_records_feedback() {
        let bank = bank();
        let mut env = WordleEnv::with_seed(&bank, 8);
        let mut policy = Consistent::new(&bank);
        let mut rng = StdRng::seed_from_u64(8);

        let result = run_episode(&mut env, &mut policy, &mut rng, 10, false).unwrap();
        for (guess, feedback) in &result.guesses {
            assert_eq!(*feedback, Feedback::score(&result.hidden, guess));
        }
        // With five words and consistent guessing the hidden word is found
        assert!(result.won);
    }

    #[test]
    fn random_letters_eventually_hit_a_word() {
        // A single-letter-repeated bank keeps the hit rate high enough for a test
        let lines: Vec<String> = (b'a'..=b'z')
            .map(|c| (c as char).to_string().repeat(5))
            .collect();
        let bank = WordBank::from_lines(&lines).unwrap();
        let mut env = WordleEnv::with_seed(&bank, 5);
        let mut policy = RandomLetters::new();
        let mut rng = StdRng::seed_from_u64(5);

        let result = run_episode(&mut env, &mut policy, &mut rng, DEFAULT_MAX_ATTEMPTS, false)
            .unwrap();
        assert!(result.turns() >= 1);
    }

    #[test]
    fn simulation_runs_requested_episodes() {
        let bank = bank();
        let mut config = SimulateConfig::new("consistent".to_string());
        config.episodes = 4;
        config.seed = Some(17);
        config.render = false;

        let results = run_simulation(&config, &bank).unwrap();
        assert_eq!(results.len(), 4);
    }

    #[test]
    fn simulation_is_reproducible_with_seed() {
        let bank = bank();
        let mut config = SimulateConfig::new("random-word".to_string());
        config.episodes = 3;
        config.seed = Some(99);
        config.render = false;

        let a = run_simulation(&config, &bank).unwrap();
        let b = run_simulation(&config, &bank).unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.hidden, y.hidden);
            assert_eq!(x.guesses, y.guesses);
        }
    }

    #[test]
    fn simulation_rejects_unknown_policy() {
        let bank = bank();
        let config = SimulateConfig::new("oracle".to_string());
        let err = run_simulation(&config, &bank).unwrap_err();
        assert!(err.to_string().contains("unknown policy"));
    }
}
