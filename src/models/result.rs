//! Smoke test result models
//!
//! Results for individual cases and the run summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SmokeCase;

/// Result of executing one smoke case
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseResult {
    pub case: SmokeCase,
    /// HTTP status code; 0 when no response was received at all
    pub status_code: u16,
    pub body: String,
    pub duration_ms: u64,
    pub passed: bool,
    pub message: Option<String>,
}

impl CaseResult {
    /// Build a result from a received HTTP response
    pub fn from_response(
        case: SmokeCase,
        status_code: u16,
        body: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            case,
            status_code,
            body: body.into(),
            duration_ms,
            passed: (200..300).contains(&status_code),
            message: None,
        }
    }

    /// Build a soft failure for a request that could not be completed
    pub fn transport_failure(case: SmokeCase, duration_ms: u64, error: impl Into<String>) -> Self {
        Self {
            case,
            status_code: 0,
            body: String::new(),
            duration_ms,
            passed: false,
            message: Some(error.into()),
        }
    }

    pub fn symbol(&self) -> &'static str {
        if self.passed {
            "✓"
        } else {
            "✗"
        }
    }
}

/// Summary of a full smoke run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub base_url: String,
    pub finished_at: DateTime<Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub total_duration_ms: u64,
    pub results: Vec<CaseResult>,
}

impl RunSummary {
    pub fn new(base_url: impl Into<String>, results: Vec<CaseResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;
        let total_duration_ms = results.iter().map(|r| r.duration_ms).sum();

        Self {
            base_url: base_url.into(),
            finished_at: Utc::now(),
            total,
            passed,
            failed,
            total_duration_ms,
            results,
        }
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    pub fn is_all_passed(&self) -> bool {
        self.passed == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_boundary() {
        // Exact 2xx boundary: 199 fails, 200 and 299 pass, 300 fails
        assert!(!CaseResult::from_response(SmokeCase::HealthCheck, 199, "", 1).passed);
        assert!(CaseResult::from_response(SmokeCase::HealthCheck, 200, "", 1).passed);
        assert!(CaseResult::from_response(SmokeCase::HealthCheck, 299, "", 1).passed);
        assert!(!CaseResult::from_response(SmokeCase::HealthCheck, 300, "", 1).passed);
    }

    #[test]
    fn test_transport_failure() {
        let result =
            CaseResult::transport_failure(SmokeCase::CardGeneration, 5, "connection refused");
        assert_eq!(result.status_code, 0);
        assert!(!result.passed);
        assert_eq!(result.message.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_summary_counts() {
        let results = vec![
            CaseResult::from_response(SmokeCase::HealthCheck, 200, "{}", 10),
            CaseResult::from_response(SmokeCase::CardGeneration, 404, "not found", 20),
            CaseResult::from_response(SmokeCase::PhotoProcessing, 404, "not found", 30),
        ];

        let summary = RunSummary::new("http://localhost:9000", results);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.total_duration_ms, 60);
        assert!(!summary.is_all_passed());
    }

    #[test]
    fn test_empty_summary() {
        let summary = RunSummary::new("http://localhost:9000", vec![]);
        assert_eq!(summary.passed, 0);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.pass_rate(), 0.0);
    }
}
