//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use std::path::Path;

use chrono::NaiveDate;
use headerguard::config::Config;
use headerguard::core::models::{Identity, RuleClass, StagedFile, ValidationResult};
use headerguard::core::services::{check_header, is_documentable, is_exempt};
use test_case::test_case;

use crate::common::py_header;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 19).unwrap()
}

fn identity() -> Identity {
    Identity::new("Test User", "test@example.com").unwrap()
}

fn check_py(text: &str) -> ValidationResult {
    let lines: Vec<String> = text.lines().map(String::from).collect();
    check_header(&lines, RuleClass::LineComment, today(), &identity())
}

// =============================================================================
// Exemption Tests
// =============================================================================

#[test_case(".git/hooks/pre-commit.py", true ; "git metadata dir")]
#[test_case(".cursor/rules.md", true ; "cursor dir")]
#[test_case("venv/bin/activate.py", true ; "venv dir")]
#[test_case("app/.venv/x.py", true ; "nested dot venv")]
#[test_case("CHANGELOG.md", true ; "changelog itself")]
#[test_case("README.md", true ; "readme")]
#[test_case(".pre-commit-config.yaml", true ; "pre-commit config")]
#[test_case("src/module.py", false ; "plain source")]
#[test_case("docs/Readme.md", false ; "file names are case sensitive")]
fn test_is_exempt(path: &str, expected: bool) {
    assert_eq!(is_exempt(Path::new(path), &Config::default()), expected, "path={path:?}");
}

#[test_case("tool.py", true ; "python")]
#[test_case("ci/deploy.YAML", true ; "uppercase yaml")]
#[test_case("conf.yml", true ; "yml")]
#[test_case("notes.md", true ; "markdown")]
#[test_case("data.json", true ; "json")]
#[test_case("lib.rs", false ; "rust is not recognized")]
#[test_case("archive.json.gz", false ; "only the last extension counts")]
#[test_case("README.md", false ; "exempt file")]
fn test_is_documentable(path: &str, expected: bool) {
    let file = StagedFile::new(path, true);
    assert_eq!(is_documentable(&file, &Config::default()), expected, "path={path:?}");
}

// =============================================================================
// Date Freshness Tests
// =============================================================================

#[test_case("2025-10-18" ; "yesterday")]
#[test_case("2025-10-20" ; "tomorrow")]
#[test_case("2024-10-19" ; "last year")]
#[test_case("1970-01-01" ; "epoch")]
fn test_any_other_date_fails(date: &str) {
    let result = check_py(&py_header(date, "Test User<test@example.com>"));
    assert_eq!(
        result.reason().map(String::from),
        Some(format!("Last Updated not today: {date} != 2025-10-19"))
    );
}

// =============================================================================
// Identity Tests
// =============================================================================

#[test_case("Test User<test@example.com>", true ; "exact match")]
#[test_case("  Test User<test@example.com>  ", true ; "surrounding whitespace is trimmed")]
#[test_case("Test User <test@example.com>", false ; "space before angle bracket")]
#[test_case("Test  User<test@example.com>", false ; "double inner space")]
#[test_case("test user<test@example.com>", false ; "different case")]
#[test_case("Test User<TEST@example.com>", false ; "email case")]
#[test_case("Test User", false ; "name only")]
fn test_modified_by_match(value: &str, passes: bool) {
    let result = check_py(&py_header("2025-10-19", value));
    assert_eq!(result.is_pass(), passes, "value={value:?} result={result:?}");
}
