//! api-smoke - HTTP smoke test runner
//!
//! A CLI tool that checks the card generation / photo processing API service
//! is alive: a health check plus two POST endpoints with synthetic payloads,
//! each classified by HTTP status code. Failures are informational; the exit
//! code stays 0 as long as the tool itself could run.
//!
//! ## Usage
//!
//! ```bash
//! # Run the full suite against the default local service
//! api-smoke run
//!
//! # Run against a remote deployment
//! API_SECRET_KEY=... api-smoke run https://api.example.com
//!
//! # Run a single case
//! api-smoke run --case 2
//!
//! # List available cases
//! api-smoke list --detailed
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

mod cli;
mod config;
mod executor;
mod http;
mod models;
mod output;
mod utils;

use cli::Args;
use config::{AppConfig, EnvConfig};
use executor::{ParallelExecutor, RunnerConfig, SmokeRunner};
use models::{CaseResult, RunSummary, SmokeCase};
use output::{write_summary_to_file, OutputFormat, ResultFormatter};
use utils::{init_logger, LogLevel};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.as_deref() {
        Some(name) => LogLevel::from_str(name)
            .ok_or_else(|| anyhow::anyhow!("Invalid log level: {name}"))?,
        None if args.verbose => LogLevel::Debug,
        None => LogLevel::Info,
    };
    init_logger(level);

    match args.command {
        cli::Command::Run(run_args) => {
            run_smoke(run_args).await?;
        }
        cli::Command::List(list_args) => {
            list_cases(list_args);
        }
        cli::Command::Config(config_args) => {
            manage_config(config_args)?;
        }
    }

    Ok(())
}

async fn run_smoke(args: cli::RunArgs) -> Result<()> {
    let env = EnvConfig::load();
    let file_config = AppConfig::load_default()?;

    // Resolution order: CLI argument, then environment, then config file
    let base_url = args
        .base_url
        .or(env.base_url.clone())
        .unwrap_or_else(|| file_config.base_url.clone());
    let timeout = args.timeout.or(env.timeout).unwrap_or(file_config.timeout_secs);
    let parallel = args.parallel || env.parallel.unwrap_or(file_config.parallel);
    let concurrent = args
        .concurrent
        .or(env.concurrent)
        .unwrap_or(file_config.max_concurrent);
    let format_name = args
        .format
        .or(env.format.clone())
        .unwrap_or_else(|| file_config.format.clone());
    let format = OutputFormat::parse(&format_name)?;
    let api_key = env.api_key_or_empty();

    let cases = match args.case {
        Some(n) => {
            let case = SmokeCase::from_number(n)
                .ok_or_else(|| anyhow::anyhow!("Invalid case number: {n}"))?;
            vec![case]
        }
        None => SmokeCase::all(),
    };

    info!(
        "Smoke testing {} ({} cases, timeout {}s)",
        base_url,
        cases.len(),
        timeout
    );

    let runner_config = RunnerConfig::new(&base_url, api_key).with_timeout(timeout);
    let formatter = ResultFormatter::new(format);

    // Per-case output goes to stdout as cases complete in table mode; the
    // other formats report everything through the final summary.
    let stream_cases = format == OutputFormat::Table;

    let results: Vec<CaseResult> = if parallel {
        let executor = ParallelExecutor::new(concurrent);
        let results = executor.run_cases(&runner_config, cases).await?;
        if stream_cases {
            for result in &results {
                println!("{}\n", formatter.format_result(result));
            }
        }
        results
    } else {
        let runner = SmokeRunner::new(&runner_config)?;
        let mut results = Vec::new();
        for case in cases {
            let result = runner.run_case(case).await;
            if stream_cases {
                println!("{}\n", formatter.format_result(&result));
            }
            results.push(result);
        }
        results
    };

    let summary = RunSummary::new(&base_url, results);
    println!("{}", formatter.format_summary(&summary));

    if let Some(path) = &args.output {
        write_summary_to_file(path, &summary, format)?;
        println!("Summary saved to: {path}");
    }

    // Soft failures never flip the exit code; the run itself succeeded.
    Ok(())
}

fn list_cases(args: cli::ListArgs) {
    println!("\nSmoke Test Cases\n");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    for case in SmokeCase::all() {
        if args.detailed {
            println!(
                "  {}. {:35} {} {}",
                case.number(),
                case.name(),
                case.method(),
                case.path()
            );
            if let Some(body) = case.body() {
                for line in serde_json::to_string_pretty(&body)
                    .unwrap_or_default()
                    .lines()
                {
                    println!("       {line}");
                }
            }
        } else {
            println!("  {}. {}", case.number(), case.name());
        }
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
}

fn manage_config(args: cli::ConfigArgs) -> Result<()> {
    use std::path::Path;

    match args.action {
        cli::ConfigAction::Init { output, force } => {
            let path = Path::new(&output);
            if path.exists() && !force {
                anyhow::bail!(
                    "Configuration file already exists: {output}. Use --force to overwrite."
                );
            }

            let config = AppConfig::default();
            config.save(path)?;
            println!("✓ Configuration file created: {output}");
            println!("\nEdit the file to customize your settings.");
        }

        cli::ConfigAction::Show { format } => {
            let config = AppConfig::load_default()?;
            let output = if format == "json" {
                serde_json::to_string_pretty(&config)?
            } else {
                serde_yaml::to_string(&config)?
            };
            println!("{output}");
        }

        cli::ConfigAction::Validate { file } => {
            let path = file.unwrap_or_else(|| {
                AppConfig::find()
                    .map(|p| p.to_string_lossy().to_string())
                    .unwrap_or_else(|| "./api-smoke.yaml".to_string())
            });

            match AppConfig::load(&path) {
                Ok(_) => {
                    println!("✓ Configuration file is valid: {path}");
                }
                Err(e) => {
                    println!("✗ Configuration file is invalid: {path}");
                    println!("  Error: {e}");
                    return Err(e);
                }
            }
        }

        cli::ConfigAction::Env => {
            config::env::print_env_help();
        }
    }

    Ok(())
}
