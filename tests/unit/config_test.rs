//! Tests for loading `.headerguard.toml`

use std::fs;

use chrono::NaiveDate;
use headerguard::Error;
use headerguard::adapters::{FixedClock, FsWorkspace};
use headerguard::config::{Config, DEFAULT_REMEDIATION};
use headerguard::core::models::RuleClass;
use headerguard::core::services::Validator;
use tempfile::TempDir;

use crate::common::mocks::MockVersionControl;

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.changelog, "CHANGELOG.md");
    assert_eq!(config.prefix_lines, 20);
    assert_eq!(config.remediation, DEFAULT_REMEDIATION);
}

#[test]
fn file_overrides_are_applied() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".headerguard.toml"),
        r#"
changelog = "HISTORY.md"
prefix_lines = 5
remediation = "See CONTRIBUTING.md."

[exempt]
dirs = ["vendor"]

[rules]
".sh" = "line-comment"
"#,
    )
    .unwrap();

    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.changelog, "HISTORY.md");
    assert_eq!(config.prefix_lines, 5);
    assert_eq!(config.remediation, "See CONTRIBUTING.md.");
    assert!(config.exempt_dirs.contains("vendor"));
    assert_eq!(config.rule_for("sh"), Some(RuleClass::LineComment));
}

#[test]
fn malformed_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".headerguard.toml"), "changelog = [").unwrap();
    assert!(matches!(Config::load(dir.path()), Err(Error::Config { .. })));
}

#[test]
fn extra_exempt_dir_skips_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".headerguard.toml"), "[exempt]\ndirs = [\"vendor\"]\n").unwrap();
    fs::create_dir_all(dir.path().join("vendor")).unwrap();
    fs::write(dir.path().join("vendor/lib.py"), "no header").unwrap();

    let config = Config::load(dir.path()).unwrap();
    let vcs = MockVersionControl::with_staged_files(&["vendor/lib.py"]);
    let ws = FsWorkspace::new(dir.path().to_path_buf());
    let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 10, 19).unwrap());

    let report = Validator::new(&vcs, &ws, &clock, &config).run().unwrap();
    assert!(report.passed, "{:?}", report.failures);
}

#[test]
fn renamed_changelog_is_required() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".headerguard.toml"), "changelog = \"HISTORY.md\"\n").unwrap();
    fs::write(dir.path().join("a.json"), "{}").unwrap();

    let config = Config::load(dir.path()).unwrap();
    let vcs = MockVersionControl::with_staged_files(&["a.json", "CHANGELOG.md"]);
    let ws = FsWorkspace::new(dir.path().to_path_buf());
    let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 10, 19).unwrap());

    let report = Validator::new(&vcs, &ws, &clock, &config).run().unwrap();
    assert_eq!(
        report.failures.last().map(String::as_str),
        Some("HISTORY.md must be updated and staged with this commit")
    );
}
