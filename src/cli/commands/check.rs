//! Validate staged files (pre-commit hook)

use anyhow::Context;

use headerguard::adapters::{FsWorkspace, GitVersionControl, SystemClock};
use headerguard::config::Config;
use headerguard::core::ports::VersionControl;
use headerguard::core::services::Validator;
use headerguard::output::{OutputMode, render_report};

/// Check headers and the changelog for the staged set
pub fn check(mode: OutputMode) -> anyhow::Result<i32> {
    let root = GitVersionControl::current_dir()?
        .repo_root()
        .context("failed to locate repository root")?;

    let config = Config::load(&root)?;
    let vcs = GitVersionControl::new(root.clone());
    let workspace = FsWorkspace::new(root);

    let report = Validator::new(&vcs, &workspace, &SystemClock, &config).run()?;
    log::debug!("{} file(s) checked, {} failure(s)", report.files_checked, report.failures.len());

    render_report(&report, &config.remediation, mode);
    Ok(report.exit_code())
}
