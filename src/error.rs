//! Error types for headerguard
//!
//! Validation failures are not errors: they are collected into a
//! [`ValidationReport`](crate::core::models::ValidationReport). The variants
//! here are environment problems that abort a run before any report exists.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while preparing or running a validation
#[derive(Debug, Error)]
pub enum Error {
    /// A git invocation failed (not a repository, git missing, bad exit)
    #[error("git {command} failed: {message}")]
    Git {
        /// The git subcommand that was run
        command: String,
        /// What went wrong
        message: String,
    },

    /// Committer name or email is not configured
    #[error("git identity is not configured: {0} is unset or empty")]
    IdentityUnset(&'static str),

    /// Configuration file could not be parsed
    #[error("invalid config {path}: {message}")]
    Config {
        /// Path to the offending file
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// A path has no header rule
    #[error("no header rule for {0}")]
    UnsupportedFile(PathBuf),

    /// IO error during file operations
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A news or language-model provider returned something unusable
    #[error("{provider}: {message}")]
    Provider {
        /// Provider name
        provider: &'static str,
        /// What went wrong
        message: String,
    },

    /// Error reported by libgit2
    #[error("git2 error: {0}")]
    Git2(#[from] git2::Error),

    /// HTTP transport error
    #[cfg(feature = "news")]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result alias for headerguard operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a git command failure
    #[must_use]
    pub fn git(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Git {
            command: command.into(),
            message: message.into(),
        }
    }
}
