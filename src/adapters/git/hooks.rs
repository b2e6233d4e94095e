//! Git hook installation
//!
//! Installs a pre-commit hook that runs `headerguard check`. An existing
//! hook written by someone else is kept and the check is appended to it.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Marker identifying our hook content
const HOOK_MARKER: &str = "headerguard";

const PRE_COMMIT: &str = r"#!/bin/sh
# headerguard pre-commit hook
# Validates file headers and requires a staged CHANGELOG entry

headerguard check || exit 1
";

/// What happened to the pre-commit hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStatus {
    /// A new hook file was written
    Installed,
    /// Our check was appended to an existing foreign hook
    Appended,
    /// The hook already runs headerguard
    AlreadyPresent,
    /// An existing hook was overwritten (`force`)
    Replaced,
}

/// Install the pre-commit hook into `hooks_dir`
///
/// # Errors
///
/// Returns an error if the hooks directory is missing or the hook cannot be
/// written.
pub fn install_pre_commit(hooks_dir: &Path, force: bool) -> Result<HookStatus> {
    if !hooks_dir.is_dir() {
        return Err(Error::git(
            "hooks",
            format!("hooks directory not found: {}", hooks_dir.display()),
        ));
    }

    let hook_path = hooks_dir.join("pre-commit");
    let status = if hook_path.exists() {
        let existing = fs::read_to_string(&hook_path)?;
        if force {
            fs::write(&hook_path, PRE_COMMIT)?;
            HookStatus::Replaced
        } else if existing.contains(HOOK_MARKER) {
            return Ok(HookStatus::AlreadyPresent);
        } else {
            let new_content = format!("{}\n\n# headerguard\n{PRE_COMMIT}", existing.trim());
            fs::write(&hook_path, new_content)?;
            HookStatus::Appended
        }
    } else {
        fs::write(&hook_path, PRE_COMMIT)?;
        HookStatus::Installed
    };

    // Make executable
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&hook_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&hook_path, perms)?;
    }

    log::debug!("pre-commit hook {status:?} at {}", hook_path.display());
    Ok(status)
}
