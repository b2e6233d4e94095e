//! Integration tests for the headerguard CLI
//!
//! These tests run the binary inside temporary git repositories, the way
//! the pre-commit hook does.

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;

use assert_cmd::cargo;
use chrono::{Duration, Local};
use predicates::prelude::*;
use tempfile::TempDir;

use common::git_repo::{TempGitRepo, identity};
use common::{body, md_header, py_header};

/// Helper function to create a headerguard command
fn headerguard() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("headerguard"))
}

fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn yesterday() -> String {
    (Local::now().date_naive() - Duration::days(1)).format("%Y-%m-%d").to_string()
}

// =============================================================================
// CHECK
// =============================================================================

#[test]
fn test_nothing_staged_passes_silently() {
    let repo = TempGitRepo::new();

    headerguard()
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_only_readme_staged_passes() {
    let repo = TempGitRepo::new();
    repo.add("README.md", "# Project\n");

    headerguard()
        .arg("check")
        .current_dir(repo.path())
        .assert()
        .code(0)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_unrecognized_extensions_pass() {
    let repo = TempGitRepo::new();
    repo.add("src/main.rs", "fn main() {}\n");
    repo.add("Makefile", "all:\n");

    headerguard().current_dir(repo.path()).assert().success();
}

#[test]
fn test_valid_headers_with_changelog_pass() {
    let repo = TempGitRepo::new();
    repo.add("module.py", &py_header(&today(), &identity()));
    repo.add("docs/guide.md", &md_header(&today(), &identity()));
    repo.add("CHANGELOG.md", "# Changelog\n");

    headerguard()
        .arg("check")
        .current_dir(repo.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_missing_changelog_fails() {
    let repo = TempGitRepo::new();
    repo.add("module.py", &py_header(&today(), &identity()));

    headerguard()
        .current_dir(repo.path())
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Header/CHANGELOG validation failed:\n"))
        .stderr(predicate::str::contains(
            " - CHANGELOG.md must be updated and staged with this commit\n",
        ))
        .stderr(predicate::str::contains(
            "Please update file headers per AGENTS.md/CRUSH.md and add CHANGELOG entry.",
        ))
        .stderr(predicate::str::contains("module.py:").not());
}

#[test]
fn test_stale_date_fails() {
    let repo = TempGitRepo::new();
    repo.add("module.py", &py_header(&yesterday(), &identity()));
    repo.add("CHANGELOG.md", "# Changelog\n");

    headerguard()
        .current_dir(repo.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!(
            " - module.py: Last Updated not today: {} != {}",
            yesterday(),
            today()
        )));
}

#[test]
fn test_short_file_reads_as_empty() {
    let repo = TempGitRepo::new();
    let header = format!(
        "# Modified: See CHANGELOG.md for complete modification history\n\
         # Last Updated: {}\n\
         # Modified By: {}\n",
        today(),
        identity()
    );
    repo.add("module.py", &header);
    repo.add("CHANGELOG.md", "# Changelog\n");

    headerguard()
        .current_dir(repo.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            " - module.py: missing header marker: Modified: See CHANGELOG.md",
        ));
}

#[test]
fn test_wrong_identity_fails() {
    let repo = TempGitRepo::new();
    repo.add("config.yml", &py_header(&today(), "Test User <test@example.com>"));
    repo.add("CHANGELOG.md", "# Changelog\n");

    headerguard()
        .current_dir(repo.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!(
            "config.yml: Modified By must equal git identity: {}",
            identity()
        )));
}

#[test]
fn test_failures_in_subdirectory_run() {
    let repo = TempGitRepo::new();
    repo.add("pkg/data.json", "{\"a\": 1}\n");
    repo.add("CHANGELOG.md", "# Changelog\n");

    headerguard()
        .current_dir(repo.path().join("pkg"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("pkg/data.json: missing header marker"));
}

#[test]
fn test_json_output() {
    let repo = TempGitRepo::new();
    repo.add("module.py", &py_header(&today(), &identity()));

    let output = headerguard().arg("--json").current_dir(repo.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["passed"], false);
    assert_eq!(report["files_checked"], 1);
    assert_eq!(report["failures"][0], "CHANGELOG.md must be updated and staged with this commit");
}

#[test]
fn test_not_a_repository_is_fatal() {
    let temp = TempDir::new().unwrap();

    headerguard()
        .current_dir(temp.path())
        .env("GIT_CEILING_DIRECTORIES", temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("error:"));
}

#[test]
fn test_missing_identity_is_fatal() {
    let repo = TempGitRepo::bare_identity();
    let home = TempDir::new().unwrap();
    repo.add("module.py", "# header\n");
    repo.add("CHANGELOG.md", "# Changelog\n");

    headerguard()
        .current_dir(repo.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("git identity is not configured"));
}

#[test]
fn test_config_exempts_extra_dirs() {
    let repo = TempGitRepo::new();
    repo.add(".headerguard.toml", "[exempt]\ndirs = [\"vendor\"]\n");
    repo.add("vendor/lib.py", "print('hi')\n");

    headerguard().current_dir(repo.path()).assert().success();
}

// =============================================================================
// INIT
// =============================================================================

#[test]
fn test_init_installs_hook() {
    let repo = TempGitRepo::new();

    headerguard()
        .arg("init")
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed pre-commit hook"));

    let hook = std::fs::read_to_string(repo.path().join(".git/hooks/pre-commit")).unwrap();
    assert!(hook.contains("headerguard check"));

    headerguard()
        .arg("init")
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already runs headerguard"));
}

#[test]
fn test_init_outside_repository_fails() {
    let temp = TempDir::new().unwrap();

    headerguard()
        .arg("init")
        .current_dir(temp.path())
        .env("GIT_CEILING_DIRECTORIES", temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Not a git repository"));
}

// =============================================================================
// TEMPLATE
// =============================================================================

#[test]
fn test_template_header_passes_check() {
    let repo = TempGitRepo::new();

    let output = headerguard()
        .args(["template", "tool.py"])
        .current_dir(repo.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let header = String::from_utf8(output.stdout).unwrap();
    assert!(header.contains(&format!("# Modified By: {}", identity())));

    repo.add("tool.py", &format!("{header}\n{}", body("print")));
    repo.add("CHANGELOG.md", "# Changelog\n");

    headerguard().current_dir(repo.path()).assert().success();
}

#[test]
fn test_template_unknown_extension_fails() {
    let repo = TempGitRepo::new();

    headerguard()
        .args(["template", "main.rs"])
        .current_dir(repo.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no header rule for main.rs"));
}

// =============================================================================
// MISC
// =============================================================================

#[test]
fn test_version() {
    headerguard()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("headerguard"));
}

#[test]
fn test_help() {
    headerguard()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("header block"));
}
