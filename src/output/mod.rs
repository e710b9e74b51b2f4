//! Output formatting module
//!
//! Provides various output formats for smoke results.

mod formatter;

pub use formatter::{pretty_body, write_summary_to_file, OutputFormat, ResultFormatter};
