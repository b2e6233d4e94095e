//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in, or on port traits, and return results.
//!
//! - [`exemption`] - Decide which staged paths are never checked
//! - [`header`] - Check one file's header block
//! - [`changelog`] - Require the changelog alongside documentable files
//! - [`validator`] - Run both phases over the staged set
//! - [`template`] - Render a header block that passes the checks
//! - [`news`] - Fetch and summarize news behind an empty-string boundary

pub mod changelog;
pub mod exemption;
pub mod header;
pub mod news;
pub mod template;
pub mod validator;

pub use changelog::require_changelog;
pub use exemption::{is_documentable, is_exempt};
pub use header::check_header;
pub use news::{NewsService, Strategy};
pub use template::render_template;
pub use validator::Validator;
