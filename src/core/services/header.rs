//! Per-file header checker
//!
//! Every recognized file must open with a header block like:
//!
//! ```text
//! # ============================================================
//! # Modified: See CHANGELOG.md for complete modification history
//! # Last Updated: 2025-10-19
//! # Modified By: Jane Doe<jane@example.com>
//! # ============================================================
//! ```
//!
//! Checks run in a fixed order and stop at the first failure.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::core::models::{Identity, RuleClass, ValidationResult};

/// Pointer line that sends readers to the changelog
pub const CHANGELOG_POINTER: &str = "Modified: See CHANGELOG.md for complete modification history";

/// Label preceding the last modification date
pub const LAST_UPDATED: &str = "Last Updated:";

/// Label preceding the committer identity
pub const MODIFIED_BY: &str = "Modified By:";

/// Markers that must all appear in the prefix
pub const REQUIRED_MARKERS: [&str; 3] = [CHANGELOG_POINTER, LAST_UPDATED, MODIFIED_BY];

/// Date format of the Last Updated field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static LAST_UPDATED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Last Updated:\s*(\d{4}-\d{2}-\d{2})").expect("valid Last Updated pattern")
});

static MODIFIED_BY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Modified By:\s*(.+)").expect("valid Modified By pattern"));

/// Check the leading lines of one file
///
/// `lines` is the prefix as read from disk (already bounded), `today` and
/// `identity` are the expected field values.
#[must_use]
pub fn check_header(
    lines: &[String],
    class: RuleClass,
    today: NaiveDate,
    identity: &Identity,
) -> ValidationResult {
    let text = lines.join("\n");

    if let Some(missing) = REQUIRED_MARKERS.iter().find(|m| !text.contains(*m)) {
        return ValidationResult::fail(format!("missing header marker: {missing}"));
    }

    let today = today.format(DATE_FORMAT).to_string();
    let Some(found) = LAST_UPDATED_RE.captures(&text).and_then(|c| c.get(1)) else {
        return ValidationResult::fail("Last Updated field missing or malformed");
    };
    if found.as_str() != today {
        return ValidationResult::fail(format!(
            "Last Updated not today: {} != {today}",
            found.as_str()
        ));
    }

    let modified_by = MODIFIED_BY_RE
        .captures(&text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or_default();
    if modified_by.is_empty() {
        return ValidationResult::fail("Modified By field missing or empty");
    }
    let expected = identity.to_string();
    if modified_by != expected {
        return ValidationResult::fail(format!("Modified By must equal git identity: {expected}"));
    }

    if !class.convention_met(lines) {
        return ValidationResult::fail(class.failure_reason());
    }

    ValidationResult::Pass
}
