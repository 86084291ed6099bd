//! Agents that play the environment
//!
//! Policies here pick actions from the feedback history. They are used by
//! the simulation driver and the benchmark.

pub mod policy;

pub use policy::{Consistent, Policy, PolicyType, RandomLetters, RandomWord};
