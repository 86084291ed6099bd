//! Interactive terminal game for a human player

mod app;
mod rendering;

pub use app::{App, run_tui};
