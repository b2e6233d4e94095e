//! Domain models for headerguard
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`StagedFile`] - A path staged for the next commit
//! - [`RuleClass`] - Which header convention a file extension follows
//! - [`Identity`] - The committer, rendered as `name<email>`
//! - [`ValidationResult`] - Outcome of checking one file
//! - [`ValidationReport`] - Every failure of one run

mod identity;
mod report;
mod rule;
mod staged_file;

pub use identity::Identity;
pub use report::{ValidationReport, ValidationResult};
pub use rule::{HeaderRule, RuleClass};
pub use staged_file::StagedFile;
