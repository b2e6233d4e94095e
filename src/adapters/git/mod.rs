//! Git integration adapter
//!
//! Implements `VersionControl` using git commands and libgit2.
//!
//! - [`hooks`] - Git hooks installation
//! - [`staging`] - Staged file detection

pub mod hooks;
pub mod staging;

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::core::models::Identity;
use crate::core::ports::VersionControl;
use crate::error::{Error, Result};

pub use hooks::{HookStatus, install_pre_commit};
pub use staging::get_staged_files;

/// Git-based version control implementation
#[derive(Debug, Clone)]
pub struct GitVersionControl {
    /// Working directory
    workdir: PathBuf,
}

impl GitVersionControl {
    /// Create a new git version control adapter
    #[must_use]
    pub const fn new(workdir: PathBuf) -> Self {
        Self { workdir }
    }

    /// Create a git adapter for the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn current_dir() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Directory git runs hooks from (honours `core.hooksPath` and worktrees)
    pub fn hooks_dir(&self) -> Result<PathBuf> {
        let path = PathBuf::from(self.rev_parse(&["--git-path", "hooks"])?);
        Ok(if path.is_absolute() {
            path
        } else {
            self.workdir.join(path)
        })
    }

    fn rev_parse(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .current_dir(&self.workdir)
            .arg("rev-parse")
            .args(args)
            .output()
            .map_err(|e| Error::git("rev-parse", e.to_string()))?;

        if !output.status.success() {
            return Err(Error::git(
                "rev-parse",
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Default for GitVersionControl {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

impl VersionControl for GitVersionControl {
    fn staged_files(&self) -> Result<Vec<String>> {
        get_staged_files(&self.workdir)
    }

    fn identity(&self) -> Result<Identity> {
        let repo = git2::Repository::discover(&self.workdir)?;
        let config = repo.config()?;
        let name = read_config_string(&config, "user.name")?;
        let email = read_config_string(&config, "user.email")?;
        Identity::new(name, email)
    }

    fn repo_root(&self) -> Result<PathBuf> {
        self.rev_parse(&["--show-toplevel"]).map(PathBuf::from)
    }
}

/// Read a string key, mapping an absent key to [`Error::IdentityUnset`]
fn read_config_string(config: &git2::Config, key: &'static str) -> Result<String> {
    match config.get_string(key) {
        Ok(value) => Ok(value),
        Err(e) if e.code() == git2::ErrorCode::NotFound => Err(Error::IdentityUnset(key)),
        Err(e) => Err(e.into()),
    }
}

/// Whether `path` is inside a git work tree
#[must_use]
pub fn is_inside_repo(path: &Path) -> bool {
    Command::new("git")
        .current_dir(path)
        .args(["rev-parse", "--is-inside-work-tree"])
        .output()
        .is_ok_and(|o| o.status.success())
}
