//! Global changelog requirement

use crate::config::Config;
use crate::core::models::StagedFile;

use super::exemption::is_documentable;

/// Failure reason when documentable files are staged without the changelog,
/// `None` when the requirement holds.
#[must_use]
pub fn require_changelog(files: &[StagedFile], config: &Config) -> Option<String> {
    let documentable = files.iter().filter(|f| is_documentable(f, config)).count();
    if documentable == 0 {
        return None;
    }

    let changelog_staged = files.iter().any(|f| f.file_name() == Some(config.changelog.as_str()));
    if changelog_staged {
        return None;
    }

    log::debug!("{documentable} documentable file(s) staged without {}", config.changelog);
    Some(format!("{} must be updated and staged with this commit", config.changelog))
}
