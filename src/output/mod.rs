//! Terminal output formatting
//!
//! Episode rendering and display utilities for CLI results.

pub mod display;
pub mod formatters;
pub mod render;

pub use display::{print_benchmark_result, print_episode_result};
pub use render::render_session;
