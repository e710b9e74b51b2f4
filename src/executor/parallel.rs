//! Parallel smoke case execution
//!
//! Opt-in concurrent execution. Results are re-sorted to the original case
//! order before they are reported, so output stays deterministic.

use anyhow::Result;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tracing::{debug, info};

use crate::models::{CaseResult, SmokeCase};

use super::{RunnerConfig, SmokeRunner};

/// Bounded parallel executor for smoke cases
pub struct ParallelExecutor {
    max_concurrent: usize,
}

impl ParallelExecutor {
    pub fn new(max_concurrent: usize) -> Self {
        Self {
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Run the given cases concurrently, bounded by a semaphore
    pub async fn run_cases(
        &self,
        config: &RunnerConfig,
        cases: Vec<SmokeCase>,
    ) -> Result<Vec<CaseResult>> {
        info!(
            "Running {} cases in parallel (max {} concurrent)",
            cases.len(),
            self.max_concurrent
        );

        let start = Instant::now();
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let runner = Arc::new(SmokeRunner::new(config)?);

        let mut handles = Vec::new();

        for case in cases {
            let semaphore = semaphore.clone();
            let runner = runner.clone();

            let handle = tokio::spawn(async move {
                let _permit = semaphore.acquire().await.unwrap();
                debug!("Starting parallel execution of {}", case);
                runner.run_case(case).await
            });

            handles.push(handle);
        }

        let mut results: Vec<CaseResult> = join_all(handles)
            .await
            .into_iter()
            .filter_map(|r| r.ok())
            .collect();

        // Restore the original case order for stable output
        results.sort_by_key(|r| r.case.number());

        info!(
            "Parallel execution completed in {}ms",
            start.elapsed().as_millis()
        );

        Ok(results)
    }
}

impl Default for ParallelExecutor {
    fn default() -> Self {
        Self::new(4)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_parallel_executor_creation() {
        let executor = ParallelExecutor::new(8);
        assert_eq!(executor.max_concurrent, 8);
    }

    #[test]
    fn test_concurrency_floor() {
        // Zero concurrency would deadlock the semaphore
        let executor = ParallelExecutor::new(0);
        assert_eq!(executor.max_concurrent, 1);
    }

    #[tokio::test]
    async fn test_results_keep_case_order() {
        // Unreachable host: every case soft-fails, but ordering must hold.
        let config = RunnerConfig::new("http://127.0.0.1:1", "key").with_timeout(2);
        let executor = ParallelExecutor::new(3);

        let results = executor
            .run_cases(&config, SmokeCase::all())
            .await
            .unwrap();

        let numbers: Vec<u8> = results.iter().map(|r| r.case.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(results.iter().all(|r| !r.passed));
    }
}
