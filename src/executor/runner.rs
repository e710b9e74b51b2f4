//! Smoke case execution
//!
//! Runs individual smoke cases against the service under test.

use anyhow::Result;
use tracing::info;

use crate::http::{HttpClient, HttpRequest};
use crate::models::{CaseResult, Method, SmokeCase};
use crate::utils::Timer;

/// Runner configuration, resolved once by the entry point
#[derive(Clone, Debug)]
pub struct RunnerConfig {
    /// Base URL of the service under test
    pub base_url: String,
    /// Value for the X-API-KEY header; may be empty when unset
    pub api_key: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RunnerConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_secs: 30,
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Executes smoke cases sequentially
pub struct SmokeRunner {
    client: HttpClient,
}

impl SmokeRunner {
    /// Create a runner; the API key and content type ride on every request
    pub fn new(config: &RunnerConfig) -> Result<Self> {
        let client = HttpClient::with_timeout(config.timeout_secs)?
            .base_url(&config.base_url)
            .default_header("X-API-KEY", &config.api_key)?
            .default_header("Content-Type", "application/json")?;

        Ok(Self { client })
    }

    /// Run a single smoke case
    ///
    /// A non-2xx response and a transport failure are both soft failures;
    /// this always yields exactly one result and never aborts the run.
    pub async fn run_case(&self, case: SmokeCase) -> CaseResult {
        info!("Running {}", case);

        let timer = Timer::start(case.name());

        let mut request = match case.method() {
            Method::Get => HttpRequest::get(case.path()),
            Method::Post => HttpRequest::post(case.path()),
        };
        if let Some(body) = case.body() {
            request = request.body(body.to_string());
        }

        match self.client.send(request).await {
            Ok(resp) => {
                CaseResult::from_response(case, resp.status_code, resp.body, resp.duration_ms)
            }
            Err(e) => CaseResult::transport_failure(case, timer.elapsed_ms(), e.to_string()),
        }
    }
}
