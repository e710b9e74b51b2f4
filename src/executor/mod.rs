//! Smoke test execution engine
//!
//! Provides sequential and parallel case execution.

mod parallel;
mod runner;

pub use parallel::ParallelExecutor;
pub use runner::{RunnerConfig, SmokeRunner};
