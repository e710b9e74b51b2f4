//! Output formatters for smoke results
//!
//! Provides table, JSON, CSV and summary output formats.

use std::io::Write;

use crate::models::{CaseResult, RunSummary};

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
    Csv,
    Summary,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "csv" => Some(OutputFormat::Csv),
            "summary" => Some(OutputFormat::Summary),
            _ => None,
        }
    }

    /// Parse a format name, rejecting unknown values
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown output format: {s} (expected table, json, json-pretty, csv, summary)"
            )
        })
    }
}

/// Pretty-print a response body when it parses as JSON, pass it through raw
/// otherwise. Purely cosmetic: malformed bodies are never an error.
pub fn pretty_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    }
}

/// Result formatter
pub struct ResultFormatter {
    format: OutputFormat,
    colorize: bool,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colorize: true,
        }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    /// Format a single case result
    pub fn format_result(&self, result: &CaseResult) -> String {
        match self.format {
            OutputFormat::Table => self.format_result_table(result),
            OutputFormat::Json => serde_json::to_string(result).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(result).unwrap_or_default(),
            OutputFormat::Csv => self.format_result_csv(result),
            OutputFormat::Summary => self.format_result_summary(result),
        }
    }

    fn format_result_table(&self, result: &CaseResult) -> String {
        let status_str = if self.colorize {
            if result.passed {
                "\x1b[32m✓ PASS\x1b[0m"
            } else {
                "\x1b[31m✗ FAIL\x1b[0m"
            }
        } else if result.passed {
            "✓ PASS"
        } else {
            "✗ FAIL"
        };

        let mut output = format!(
            "{:2}. {:35} {} (HTTP {}) [{:>6}ms]",
            result.case.number(),
            result.case.name(),
            status_str,
            result.status_code,
            result.duration_ms
        );

        if let Some(msg) = &result.message {
            output.push_str(&format!("\n    {msg}"));
        }

        if !result.body.is_empty() {
            for line in pretty_body(&result.body).lines() {
                output.push_str(&format!("\n    {line}"));
            }
        }

        output
    }

    fn format_result_csv(&self, result: &CaseResult) -> String {
        format!(
            "{},{},{},{},{},\"{}\"",
            result.case.number(),
            result.case.name(),
            if result.passed { "pass" } else { "fail" },
            result.status_code,
            result.duration_ms,
            result.message.as_deref().unwrap_or("").replace('"', "\"\"")
        )
    }

    fn format_result_summary(&self, result: &CaseResult) -> String {
        format!(
            "{} {} (HTTP {}, {}ms)",
            result.symbol(),
            result.case.name(),
            result.status_code,
            result.duration_ms
        )
    }

    /// Format the full run summary
    pub fn format_summary(&self, summary: &RunSummary) -> String {
        match self.format {
            OutputFormat::Table => self.format_summary_table(summary),
            OutputFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(summary).unwrap_or_default(),
            OutputFormat::Csv => self.format_summary_csv(summary),
            OutputFormat::Summary => self.format_summary_brief(summary),
        }
    }

    fn format_summary_table(&self, summary: &RunSummary) -> String {
        let mut output = String::new();

        output.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
        output.push_str(&format!(" Smoke Test Results - {}\n", summary.base_url));
        output.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

        for result in &summary.results {
            output.push_str(&format!(
                " {} {:2}. {:35} HTTP {:3} [{:>6}ms]\n",
                result.symbol(),
                result.case.number(),
                result.case.name(),
                result.status_code,
                result.duration_ms
            ));
        }

        output.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

        let pass_str = if self.colorize {
            format!("\x1b[32m{}\x1b[0m", summary.passed)
        } else {
            summary.passed.to_string()
        };
        let fail_str = if self.colorize && summary.failed > 0 {
            format!("\x1b[31m{}\x1b[0m", summary.failed)
        } else {
            summary.failed.to_string()
        };

        output.push_str(&format!(
            " TESTS_PASSED: {} | TESTS_FAILED: {} | Total: {}\n",
            pass_str, fail_str, summary.total
        ));
        output.push_str(&format!(
            " Pass Rate: {:.1}% | Duration: {}ms\n",
            summary.pass_rate(),
            summary.total_duration_ms
        ));

        output
    }

    fn format_summary_csv(&self, summary: &RunSummary) -> String {
        let mut output = String::new();
        output.push_str("case_num,case_name,status,status_code,duration_ms,message\n");
        for result in &summary.results {
            output.push_str(&self.format_result_csv(result));
            output.push('\n');
        }
        output
    }

    fn format_summary_brief(&self, summary: &RunSummary) -> String {
        format!(
            "{}: {}/{} passed ({:.1}%) in {}ms",
            summary.base_url,
            summary.passed,
            summary.total,
            summary.pass_rate(),
            summary.total_duration_ms
        )
    }
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self::new(OutputFormat::Table)
    }
}

/// Write a formatted summary to a file
pub fn write_summary_to_file(
    path: &str,
    summary: &RunSummary,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let formatter = ResultFormatter::new(format).no_color();
    let content = formatter.format_summary(summary);

    let mut file = std::fs::File::create(path)?;
    file.write_all(content.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CaseResult, SmokeCase};

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("TABLE"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_str("unknown"), None);
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let err = OutputFormat::parse("jsn").unwrap_err();
        assert!(err.to_string().contains("Unknown output format: jsn"));
        assert_eq!(OutputFormat::parse("json-pretty").unwrap(), OutputFormat::JsonPretty);
    }

    #[test]
    fn test_pretty_body_valid_json() {
        let pretty = pretty_body("{\"status\":\"ok\"}");
        assert!(pretty.contains("\"status\": \"ok\""));
    }

    #[test]
    fn test_pretty_body_malformed_json_falls_back_to_raw() {
        let raw = "not json at all {{{";
        assert_eq!(pretty_body(raw), raw);
    }

    #[test]
    fn test_format_result_includes_body() {
        let result = CaseResult::from_response(
            SmokeCase::HealthCheck,
            200,
            "{\"status\":\"ok\"}",
            12,
        );
        let formatter = ResultFormatter::new(OutputFormat::Table).no_color();
        let output = formatter.format_result(&result);
        assert!(output.contains("Health Check"));
        assert!(output.contains("✓ PASS"));
        assert!(output.contains("\"status\": \"ok\""));
    }

    #[test]
    fn test_format_summary_counts() {
        let results = vec![
            CaseResult::from_response(SmokeCase::HealthCheck, 200, "{}", 10),
            CaseResult::from_response(SmokeCase::CardGeneration, 404, "", 20),
        ];
        let summary = RunSummary::new("http://localhost:9000", results);
        let formatter = ResultFormatter::new(OutputFormat::Table).no_color();
        let output = formatter.format_summary(&summary);
        assert!(output.contains("TESTS_PASSED: 1"));
        assert!(output.contains("TESTS_FAILED: 1"));
    }

    #[test]
    fn test_csv_escapes_quotes() {
        let result =
            CaseResult::transport_failure(SmokeCase::HealthCheck, 5, "error \"quoted\" text");
        let formatter = ResultFormatter::new(OutputFormat::Csv);
        let output = formatter.format_result(&result);
        assert!(output.contains("\"\"quoted\"\""));
    }
}
