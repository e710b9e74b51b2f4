//! Configuration module
//!
//! Handles loading and managing configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod env;

pub use env::EnvConfig;

/// Candidate config file names, checked in order
const CONFIG_CANDIDATES: &[&str] = &["api-smoke.yaml", "api-smoke.yml", "api-smoke.json"];

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the service under test
    pub base_url: String,

    /// HTTP timeout in seconds
    pub timeout_secs: u64,

    /// Run cases in parallel by default
    pub parallel: bool,

    /// Maximum concurrent cases
    pub max_concurrent: usize,

    /// Default output format
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9000".to_string(),
            timeout_secs: 30,
            parallel: false,
            max_concurrent: 4,
            format: "table".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read config file")?;

        let config: Self = if is_yaml(path.as_ref()) {
            serde_yaml::from_str(&content).context("Failed to parse YAML config")?
        } else {
            serde_json::from_str(&content).context("Failed to parse JSON config")?
        };

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = if is_yaml(path.as_ref()) {
            serde_yaml::to_string(self).context("Failed to serialize config")?
        } else {
            serde_json::to_string_pretty(self).context("Failed to serialize config")?
        };

        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// Find a config file in the current directory
    pub fn find() -> Option<PathBuf> {
        CONFIG_CANDIDATES
            .iter()
            .map(|name| PathBuf::from(*name))
            .find(|p| p.exists())
    }

    /// Load the discovered config file, or defaults when none exists
    pub fn load_default() -> Result<Self> {
        match Self::find() {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}
