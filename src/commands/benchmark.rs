//! Benchmark command
//!
//! Runs many independent episodes in parallel against one shared word bank
//! and aggregates the outcomes.

use super::simulate::{EpisodeResult, POLICY_SEED_SALT, run_episode};
use crate::agent::PolicyType;
use crate::core::GAME_LENGTH;
use crate::env::WordleEnv;
use crate::wordlists::WordBank;
use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub policy: String,
    pub count: usize,
    pub seed: u64,
    pub max_attempts: usize,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(policy: String, count: usize, seed: u64) -> Self {
        Self {
            policy,
            count,
            seed,
            max_attempts: super::simulate::DEFAULT_MAX_ATTEMPTS,
            show_progress: true,
        }
    }
}

/// Aggregated outcome of a set of episodes
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub episodes: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub average_reward: f64,
    /// Mean number of turns over won episodes
    pub average_turns_on_win: Option<f64>,
    /// `distribution[k - 1]` counts episodes won on turn `k`
    pub distribution: [usize; GAME_LENGTH],
    pub invalid_attempts: usize,
    pub duration: Duration,
    pub episodes_per_second: f64,
}

impl BenchmarkResult {
    /// Summarize a set of episode results
    #[must_use]
    pub fn from_results(results: &[EpisodeResult], duration: Duration) -> Self {
        let episodes = results.len();
        let mut distribution = [0usize; GAME_LENGTH];
        let mut won_turns = 0;

        for result in results.iter().filter(|r| r.won) {
            distribution[result.turns() - 1] += 1;
            won_turns += result.turns();
        }

        let wins = distribution.iter().sum::<usize>();
        let ratio = |n: f64| if episodes == 0 { 0.0 } else { n / episodes as f64 };
        let seconds = duration.as_secs_f64();

        Self {
            episodes,
            wins,
            losses: episodes - wins,
            win_rate: ratio(wins as f64),
            average_reward: ratio(results.iter().map(|r| f64::from(r.reward)).sum()),
            average_turns_on_win: (wins > 0).then(|| won_turns as f64 / wins as f64),
            distribution,
            invalid_attempts: results.iter().map(|r| r.invalid_attempts).sum(),
            duration,
            episodes_per_second: if seconds > 0.0 {
                episodes as f64 / seconds
            } else {
                0.0
            },
        }
    }
}

/// Run `config.count` episodes in parallel
///
/// Episode `i` uses seed `config.seed + i` for its hidden word, so a run is
/// reproducible regardless of thread scheduling.
///
/// # Errors
///
/// Returns an error for an unknown policy name or if any episode fails.
pub fn run_benchmark(config: &BenchmarkConfig, bank: &WordBank) -> Result<BenchmarkResult> {
    if PolicyType::from_name(&config.policy, bank).is_none() {
        return Err(anyhow!(
            "unknown policy '{}', expected one of: {}",
            config.policy,
            PolicyType::NAMES.join(", ")
        ));
    }

    let pb = if config.show_progress {
        ProgressBar::new(config.count as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message(config.policy.clone());

    let start = Instant::now();
    let results = (0..config.count)
        .into_par_iter()
        .map(|i| {
            let seed = config.seed.wrapping_add(i as u64);
            let mut env = WordleEnv::with_seed(bank, seed);
            let mut rng = StdRng::seed_from_u64(seed ^ POLICY_SEED_SALT);
            let mut policy = PolicyType::from_name(&config.policy, bank)
                .ok_or_else(|| anyhow!("unknown policy '{}'", config.policy))?;

            let result = run_episode(&mut env, &mut policy, &mut rng, config.max_attempts, false)
                .with_context(|| format!("episode with seed {seed} failed"));
            pb.inc(1);
            result
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_with_message("Complete!");

    let result = BenchmarkResult::from_results(&results, start.elapsed());
    log::info!(
        "benchmark: {} episodes, {} wins, {:.1}% win rate",
        result.episodes,
        result.wins,
        result.win_rate * 100.0
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};

    fn episode(turns: usize, won: bool) -> EpisodeResult {
        let guess = Word::new("aback").unwrap();
        EpisodeResult {
            hidden: guess,
            guesses: vec![(guess, Feedback::PERFECT); turns],
            reward: if won { 1.0 } else { -1.0 },
            won,
            invalid_attempts: 2,
        }
    }

    #[test]
    fn summary_counts_wins_and_turns() {
        let results = vec![
            episode(1, true),
            episode(3, true),
            episode(3, true),
            episode(6, false),
        ];
        let summary = BenchmarkResult::from_results(&results, Duration::from_secs(2));

        assert_eq!(summary.episodes, 4);
        assert_eq!(summary.wins, 3);
        assert_eq!(summary.losses, 1);
        assert!((summary.win_rate - 0.75).abs() < 1e-9);
        assert!((summary.average_reward - 0.5).abs() < 1e-9);
        assert_eq!(summary.distribution, [1, 0, 2, 0, 0, 0]);
        assert!((summary.average_turns_on_win.unwrap() - 7.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.invalid_attempts, 8);
        assert!((summary.episodes_per_second - 2.0).abs() < 1e-9);
    }

    #[test]
    fn summary_of_nothing() {
        let summary = BenchmarkResult::from_results(&[], Duration::ZERO);
        assert_eq!(summary.episodes, 0);
        assert_eq!(summary.win_rate, 0.0);
        assert!(summary.average_turns_on_win.is_none());
        assert_eq!(summary.episodes_per_second, 0.0);
    }

    #[test]
    fn benchmark_runs_in_parallel() {
        let bank = WordBank::from_lines(["aback", "abase", "abate", "crane", "fuzzy"]).unwrap();
        let mut config = BenchmarkConfig::new("consistent".to_string(), 32, 1);
        config.show_progress = false;

        let result = run_benchmark(&config, &bank).unwrap();
        assert_eq!(result.episodes, 32);
        // Consistent guessing over five words always finds the answer
        assert_eq!(result.wins, 32);
        assert_eq!(result.invalid_attempts, 0);
    }

    #[test]
    fn benchmark_is_reproducible() {
        let bank = WordBank::embedded().unwrap();
        let mut config = BenchmarkConfig::new("random-word".to_string(), 16, 42);
        config.show_progress = false;

        let a = run_benchmark(&config, &bank).unwrap();
        let b = run_benchmark(&config, &bank).unwrap();
        assert_eq!(a.wins, b.wins);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn benchmark_rejects_unknown_policy() {
        let bank = WordBank::embedded().unwrap();
        let config = BenchmarkConfig::new("oracle".to_string(), 1, 0);
        assert!(run_benchmark(&config, &bank).is_err());
    }
}
