//! Validation outcomes

use serde::Serialize;

/// Outcome of checking one file's header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// All checks passed
    Pass,
    /// First failing check, with a human-readable reason
    Fail(String),
}

impl ValidationResult {
    /// Build a failure
    #[must_use]
    pub fn fail(reason: impl Into<String>) -> Self {
        Self::Fail(reason.into())
    }

    /// Whether the file passed
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// The failure reason, if any
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Pass => None,
            Self::Fail(reason) => Some(reason),
        }
    }
}

/// Every failure of one validation run, in report order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Whether the run passed
    pub passed: bool,
    /// Number of files whose header was checked
    pub files_checked: usize,
    /// Failure lines (`<path>: <reason>` or the changelog reason)
    pub failures: Vec<String>,
}

impl ValidationReport {
    /// A passing report for an empty staged set
    #[must_use]
    pub const fn nothing_staged() -> Self {
        Self {
            passed: true,
            files_checked: 0,
            failures: Vec::new(),
        }
    }

    /// Build a report from collected failures
    #[must_use]
    pub fn from_failures(files_checked: usize, failures: Vec<String>) -> Self {
        Self {
            passed: failures.is_empty(),
            files_checked,
            failures,
        }
    }

    /// Process exit code for this report
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.passed { 0 } else { 1 }
    }
}
