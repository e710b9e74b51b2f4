//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

/// Smoke test runner for the card generation and photo processing API
#[derive(Parser, Debug)]
#[command(name = "api-smoke")]
#[command(version = "0.1.0")]
#[command(about = "Run HTTP smoke tests against the card/photo API service")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error); overrides --verbose
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the smoke test suite
    Run(RunArgs),

    /// List available smoke cases
    List(ListArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Base URL of the service under test
    pub base_url: Option<String>,

    /// Specific case number to run (1-3)
    #[arg(short, long)]
    pub case: Option<u8>,

    /// Request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Run cases in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of concurrent cases (when parallel)
    #[arg(long)]
    pub concurrent: Option<usize>,

    /// Output format (table, json, json-pretty, csv, summary)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Save summary to file
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Show detailed case information
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create a configuration file with defaults
    Init {
        /// Output path
        #[arg(short, long, default_value = "./api-smoke.yaml")]
        output: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the resolved configuration
    Show {
        /// Output format (yaml, json)
        #[arg(short, long, default_value = "yaml")]
        format: String,
    },

    /// Validate a configuration file
    Validate {
        /// Path to configuration file
        file: Option<String>,
    },

    /// Show supported environment variables
    Env,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["api-smoke", "list", "--detailed"]);
        match args.command {
            Command::List(list_args) => {
                assert!(list_args.detailed);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_run_args() {
        let args = Args::parse_from([
            "api-smoke",
            "run",
            "http://staging:9000",
            "--case",
            "2",
            "--timeout",
            "10",
            "--parallel",
        ]);
        match args.command {
            Command::Run(run_args) => {
                assert_eq!(run_args.base_url.as_deref(), Some("http://staging:9000"));
                assert_eq!(run_args.case, Some(2));
                assert_eq!(run_args.timeout, Some(10));
                assert!(run_args.parallel);
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_log_level_flag() {
        let args = Args::parse_from(["api-smoke", "--log-level", "warn", "list"]);
        assert_eq!(args.log_level.as_deref(), Some("warn"));
        assert!(!args.verbose);
    }

    #[test]
    fn test_run_args_defaults() {
        let args = Args::parse_from(["api-smoke", "run"]);
        match args.command {
            Command::Run(run_args) => {
                assert!(run_args.base_url.is_none());
                assert!(run_args.case.is_none());
                assert!(!run_args.parallel);
            }
            _ => panic!("Expected Run command"),
        }
    }
}
