//! Data models for the smoke test runner
//!
//! This module contains all data structures used throughout the application.

mod case;
mod result;

pub use case::{Method, SmokeCase};
pub use result::{CaseResult, RunSummary};
