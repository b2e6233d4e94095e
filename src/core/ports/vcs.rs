//! Version control system port
//!
//! Defines the interface for interacting with version control.

use std::path::PathBuf;

use crate::core::models::Identity;
use crate::error::Result;

/// Version control system abstraction
///
/// Implementations handle interactions with git or other VCS systems.
pub trait VersionControl {
    /// Paths staged for the next commit, relative to the repository root
    fn staged_files(&self) -> Result<Vec<String>>;

    /// The committer identity (`user.name` / `user.email`)
    fn identity(&self) -> Result<Identity>;

    /// The repository root path
    fn repo_root(&self) -> Result<PathBuf>;
}
