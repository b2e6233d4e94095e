//! Staged file detection
//!
//! Provides utilities for detecting files staged for commit.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Get list of staged files, relative to the repository root
///
/// # Errors
///
/// Returns an error if git cannot be run or exits unsuccessfully.
pub fn get_staged_files(workdir: &Path) -> Result<Vec<String>> {
    let output = Command::new("git")
        .current_dir(workdir)
        .args(["-c", "core.quotePath=false", "diff", "--cached", "--name-only"])
        .output()
        .map_err(|e| Error::git("diff --cached", e.to_string()))?;

    if !output.status.success() {
        return Err(Error::git(
            "diff --cached",
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect())
}
