//! Working tree access
//!
//! Implements `Workspace` over the local filesystem. A file that cannot be
//! opened, is not UTF-8, or is shorter than the requested prefix reads as
//! empty.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::core::ports::Workspace;

/// Filesystem workspace rooted at the repository root
#[derive(Debug, Clone)]
pub struct FsWorkspace {
    root: PathBuf,
}

impl FsWorkspace {
    /// Create a workspace rooted at `root`
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl Workspace for FsWorkspace {
    fn exists(&self, path: &Path) -> bool {
        self.root.join(path).exists()
    }

    fn read_prefix(&self, path: &Path, lines: usize) -> Vec<String> {
        read_prefix(&self.root.join(path), lines)
    }
}

/// Exactly the first `n` lines of `path`, or nothing
///
/// All-or-nothing: a file with fewer than `n` lines, or one that fails to
/// open or decode within them, yields an empty prefix.
#[must_use]
pub fn read_prefix(path: &Path, n: usize) -> Vec<String> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::debug!("{}: unreadable ({e}), treated as empty", path.display());
            return Vec::new();
        },
    };

    let lines: Result<Vec<String>, _> = BufReader::new(file).lines().take(n).collect();
    match lines {
        Ok(lines) if lines.len() == n => lines,
        Ok(lines) => {
            log::debug!("{}: only {} line(s), treated as empty", path.display(), lines.len());
            Vec::new()
        },
        Err(e) => {
            log::debug!("{}: undecodable ({e}), treated as empty", path.display());
            Vec::new()
        },
    }
}
