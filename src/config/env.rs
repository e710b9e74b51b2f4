//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration. The API key is
//! read here exactly once and threaded into the runner as an explicit value;
//! nothing reads the environment mid-run.

use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "SMOKE";

/// API key variable, unprefixed for compatibility with the service deployment
const API_KEY_VAR: &str = "API_SECRET_KEY";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// API key from API_SECRET_KEY
    pub api_key: Option<String>,
    /// Base URL from SMOKE_BASE_URL
    pub base_url: Option<String>,
    /// Timeout from SMOKE_TIMEOUT
    pub timeout: Option<u64>,
    /// Parallel from SMOKE_PARALLEL
    pub parallel: Option<bool>,
    /// Concurrency from SMOKE_CONCURRENT
    pub concurrent: Option<usize>,
    /// Output format from SMOKE_FORMAT
    pub format: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            api_key: env::var(API_KEY_VAR).ok(),
            base_url: get_env("BASE_URL"),
            timeout: get_env_parse("TIMEOUT"),
            parallel: get_env_bool("PARALLEL"),
            concurrent: get_env_parse("CONCURRENT"),
            format: get_env("FORMAT"),
        }
    }

    /// Get API key with empty fallback; absence is tolerated
    pub fn api_key_or_empty(&self) -> String {
        self.api_key.clone().unwrap_or_default()
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get environment variable and parse to type
fn get_env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    get_env(name).and_then(|v| v.parse().ok())
}

/// Get environment variable as boolean
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| {
        matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "enabled"
        )
    })
}

/// Builder for setting environment variables (useful for testing)
pub struct EnvBuilder {
    vars: Vec<(String, String)>,
}

impl EnvBuilder {
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.vars.push((API_KEY_VAR.to_string(), key.into()));
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_BASE_URL"), url.into()));
        self
    }

    pub fn timeout(mut self, timeout: u64) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_TIMEOUT"), timeout.to_string()));
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_PARALLEL"), parallel.to_string()));
        self
    }

    /// Apply and return guard that restores on drop
    pub fn apply_scoped(self) -> EnvGuard {
        let previous: Vec<_> = self
            .vars
            .iter()
            .map(|(k, _)| (k.clone(), env::var(k).ok()))
            .collect();

        for (key, value) in self.vars {
            env::set_var(key, value);
        }

        EnvGuard { previous }
    }
}

impl Default for EnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard that restores environment variables on drop
pub struct EnvGuard {
    previous: Vec<(String, Option<String>)>,
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.previous {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }
}

/// Print supported environment variables
pub fn print_env_help() {
    println!("Environment Variables:");
    println!();
    println!("  {API_KEY_VAR}        API key for the X-API-KEY header");
    println!("  {ENV_PREFIX}_BASE_URL        Base URL of the service under test");
    println!("  {ENV_PREFIX}_TIMEOUT         Request timeout in seconds");
    println!("  {ENV_PREFIX}_PARALLEL        Enable parallel execution (true/false)");
    println!("  {ENV_PREFIX}_CONCURRENT      Maximum concurrent cases");
    println!("  {ENV_PREFIX}_FORMAT          Output format (table, json, json-pretty, csv, summary)");
    println!();
    println!("Example:");
    println!("  export {API_KEY_VAR}=my-secret");
    println!("  api-smoke run http://staging:9000");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_config_default() {
        let config = EnvConfig::default();
        assert!(config.api_key.is_none());
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_missing_api_key_degrades_to_empty() {
        let config = EnvConfig::default();
        assert_eq!(config.api_key_or_empty(), "");
    }

    #[test]
    fn test_env_builder() {
        let _guard = EnvBuilder::new()
            .api_key("secret-key")
            .base_url("http://staging:9000")
            .timeout(60)
            .apply_scoped();

        let config = EnvConfig::load();
        assert_eq!(config.api_key, Some("secret-key".to_string()));
        assert_eq!(config.base_url, Some("http://staging:9000".to_string()));
        assert_eq!(config.timeout, Some(60));
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = EnvBuilder::new().parallel(true).apply_scoped();

        let config = EnvConfig::load();
        assert_eq!(config.parallel, Some(true));
    }
}
