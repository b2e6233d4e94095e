//! Working tree port

use std::path::Path;

/// Read access to files in the working tree
pub trait Workspace {
    /// Whether `path` (relative to the repository root) exists
    fn exists(&self, path: &Path) -> bool;

    /// The first `lines` lines of `path`, without line terminators.
    ///
    /// Never fails: a file that is unreadable, undecodable or shorter than
    /// `lines` yields an empty prefix.
    fn read_prefix(&self, path: &Path, lines: usize) -> Vec<String>;
}
