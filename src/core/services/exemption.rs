//! Exemption filter
//!
//! Decides which staged paths are never checked: anything under a tooling
//! directory, and a handful of well-known project files.

use std::path::{Component, Path};

use crate::config::Config;
use crate::core::models::StagedFile;

/// Whether a path is exempt from every check
#[must_use]
pub fn is_exempt(path: &Path, config: &Config) -> bool {
    let in_exempt_dir = path.components().any(|c| match c {
        Component::Normal(part) => part.to_str().is_some_and(|p| config.exempt_dirs.contains(p)),
        _ => false,
    });

    in_exempt_dir
        || path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| config.exempt_files.contains(n))
}

/// Whether a staged file requires a header and a changelog entry
#[must_use]
pub fn is_documentable(file: &StagedFile, config: &Config) -> bool {
    !is_exempt(&file.path, config) && config.rule_for(&file.extension).is_some()
}
