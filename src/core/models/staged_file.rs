//! Staged file model

use std::path::PathBuf;

/// A path staged for the next commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    /// Path relative to the repository root, as reported by git
    pub path: PathBuf,

    /// Lower-cased extension without the dot (empty when none)
    pub extension: String,

    /// Whether the path still exists in the working tree
    pub exists: bool,
}

impl StagedFile {
    /// Describe a staged path with a known existence flag
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, exists: bool) -> Self {
        let path = path.into();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        Self {
            path,
            extension,
            exists,
        }
    }

    /// Final path component
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    /// Path as displayed in reports
    #[must_use]
    pub fn display(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}
