//! Wordle Gym - CLI
//!
//! Play Wordle in the terminal, or drive the environment with a policy.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::time::Instant;
use wordle_gym::{
    commands::{
        BenchmarkConfig, BenchmarkResult, SimulateConfig, run_benchmark, run_simulation,
        simulate::DEFAULT_MAX_ATTEMPTS,
    },
    output::{print_benchmark_result, print_episode_result},
    wordlists::{WordBank, loader::load_wordlist},
};

#[derive(Parser)]
#[command(
    name = "wordle_gym",
    about = "Wordle as a reinforcement-learning environment",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for hidden words and policy choices
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play,

    /// Run episodes with a policy and print each one
    Simulate {
        /// Policy: random-letters (default), random-word, consistent
        #[arg(short, long, default_value = "random-letters")]
        policy: String,

        /// Number of episodes to play
        #[arg(short = 'n', long, default_value = "1")]
        episodes: usize,

        /// Only print the summary
        #[arg(short, long)]
        quiet: bool,

        /// Give up after this many invalid words on one turn
        #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,
    },

    /// Run many episodes in parallel and report statistics
    Benchmark {
        /// Policy: consistent (default), random-word, random-letters
        #[arg(short, long, default_value = "consistent")]
        policy: String,

        /// Number of episodes
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let bank = load_wordlist(&cli.wordlist)?;
    log::info!("loaded {} words from '{}'", bank.len(), cli.wordlist);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&bank, cli.seed),
        Commands::Simulate {
            policy,
            episodes,
            quiet,
            max_attempts,
        } => {
            let config = SimulateConfig {
                policy,
                episodes,
                seed: cli.seed,
                render: !quiet,
                max_attempts,
            };
            run_simulate_command(&config, &bank, quiet)
        }
        Commands::Benchmark { policy, count } => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            run_benchmark_command(&BenchmarkConfig::new(policy, count, seed), &bank)
        }
    }
}

fn run_play_command(bank: &WordBank, seed: Option<u64>) -> Result<()> {
    use wordle_gym::interactive::{App, run_tui};

    let app = match seed {
        Some(seed) => App::with_seed(bank, seed),
        None => App::new(bank),
    };
    run_tui(app)
}

fn run_simulate_command(config: &SimulateConfig, bank: &WordBank, quiet: bool) -> Result<()> {
    let start = Instant::now();
    let results = run_simulation(config, bank)?;

    if !quiet {
        for (i, result) in results.iter().enumerate() {
            print_episode_result(i + 1, result);
        }
    }

    print_benchmark_result(&BenchmarkResult::from_results(&results, start.elapsed()));
    Ok(())
}

fn run_benchmark_command(config: &BenchmarkConfig, bank: &WordBank) -> Result<()> {
    println!(
        "Running {} episodes with the {} policy (seed {})...",
        config.count, config.policy, config.seed
    );

    let result = run_benchmark(config, bank)?;
    print_benchmark_result(&result);
    Ok(())
}
