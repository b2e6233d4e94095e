//! Install headerguard in a repository

use std::env;

use headerguard::adapters::git::{self, GitVersionControl, HookStatus};
use headerguard::output::{OperationResult, OutputMode};

/// Install the pre-commit hook in the current repository
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<i32> {
    let cwd = env::current_dir()?;
    if !git::is_inside_repo(&cwd) {
        anyhow::bail!("Not a git repository: {}", cwd.display());
    }

    let hooks_dir = GitVersionControl::new(cwd).hooks_dir()?;
    let status = git::install_pre_commit(&hooks_dir, force)?;

    let message = match status {
        HookStatus::Installed => "Installed pre-commit hook",
        HookStatus::Appended => "Added headerguard to existing pre-commit hook",
        HookStatus::AlreadyPresent => {
            "pre-commit hook already runs headerguard (use --force to rewrite)"
        },
        HookStatus::Replaced => "Replaced pre-commit hook",
    };

    OperationResult {
        success: true,
        message: message.to_string(),
    }
    .render(mode);

    Ok(0)
}
