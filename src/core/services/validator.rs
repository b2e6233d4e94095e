//! Validation run - orchestrates the per-file and global checks
//!
//! A run enumerates the staged files once, checks the header of every
//! documentable file that still exists, then applies the changelog
//! requirement. Every failure is collected before the report is returned.

use std::path::Path;

use crate::config::Config;
use crate::core::models::{StagedFile, ValidationReport, ValidationResult};
use crate::core::ports::{Clock, VersionControl, Workspace};
use crate::error::Result;

use super::changelog::require_changelog;
use super::exemption::is_exempt;
use super::header::check_header;

/// Runs header and changelog validation against injected environment ports
#[derive(Debug)]
pub struct Validator<'a, V, W, C> {
    vcs: &'a V,
    workspace: &'a W,
    clock: &'a C,
    config: &'a Config,
}

impl<'a, V, W, C> Validator<'a, V, W, C>
where
    V: VersionControl,
    W: Workspace,
    C: Clock,
{
    /// Create a validator
    #[must_use]
    pub const fn new(vcs: &'a V, workspace: &'a W, clock: &'a C, config: &'a Config) -> Self {
        Self {
            vcs,
            workspace,
            clock,
            config,
        }
    }

    /// Validate the current staged set
    ///
    /// # Errors
    ///
    /// Fails when the staged files or the committer identity cannot be
    /// resolved. Validation failures are reported, not returned as errors.
    pub fn run(&self) -> Result<ValidationReport> {
        let paths = self.vcs.staged_files()?;
        if paths.is_empty() {
            log::debug!("nothing staged");
            return Ok(ValidationReport::nothing_staged());
        }

        let files: Vec<StagedFile> = paths
            .iter()
            .map(|p| StagedFile::new(p, self.workspace.exists(Path::new(p))))
            .collect();

        let candidates: Vec<_> = files
            .iter()
            .filter(|f| {
                if !f.exists {
                    log::debug!("{}: not in working tree, skipped", f.display());
                }
                f.exists
            })
            .filter(|f| !is_exempt(&f.path, self.config))
            .filter_map(|f| self.config.header_rule(f).map(|rule| (f, rule)))
            .collect();

        let mut failures = Vec::new();

        if !candidates.is_empty() {
            let identity = self.vcs.identity()?;
            let today = self.clock.today();

            for (file, rule) in &candidates {
                let lines = self.workspace.read_prefix(&file.path, self.config.prefix_lines);
                match check_header(&lines, rule.class, today, &identity) {
                    ValidationResult::Pass => log::debug!("{}: header ok", file.display()),
                    ValidationResult::Fail(reason) => {
                        failures.push(format!("{}: {reason}", file.display()));
                    },
                }
            }
        }

        if let Some(reason) = require_changelog(&files, self.config) {
            failures.push(reason);
        }

        Ok(ValidationReport::from_failures(candidates.len(), failures))
    }
}
