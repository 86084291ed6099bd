//! Command implementations

pub mod benchmark;
pub mod simulate;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use simulate::{EpisodeResult, SimulateConfig, run_episode, run_simulation};
