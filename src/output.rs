//! Output formatting for human and JSON modes
//!
//! Human output of a failed validation goes to stderr so hook runners show
//! it; JSON output always goes to stdout.

use serde::Serialize;

use crate::core::models::ValidationReport;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Banner line preceding the failure list
pub const FAILURE_BANNER: &str = "Header/CHANGELOG validation failed:";

/// Render the failure report as printed to stderr, or `None` when the run
/// passed (a passing run prints nothing).
#[must_use]
pub fn human_report(report: &ValidationReport, remediation: &str) -> Option<String> {
    if report.passed {
        return None;
    }

    let mut out = format!("{FAILURE_BANNER}\n");
    for failure in &report.failures {
        out.push_str(" - ");
        out.push_str(failure);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(remediation);
    out.push('\n');
    Some(out)
}

/// Render a validation report based on output mode
pub fn render_report(report: &ValidationReport, remediation: &str, mode: OutputMode) {
    match mode {
        OutputMode::Human => {
            if let Some(text) = human_report(report, remediation) {
                eprint!("{text}");
            }
        },
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(report).unwrap_or_default());
        },
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
