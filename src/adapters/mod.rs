//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `git/` - Git operations (staging, identity, hooks)
//! - `file/` - Working tree reads
//! - `clock` - System and fixed clocks
//! - `news/` - Google News and Gemini clients (feature `news`)

pub mod clock;
pub mod file;
pub mod git;
#[cfg(feature = "news")]
pub mod news;

pub use clock::{FixedClock, SystemClock};
pub use file::FsWorkspace;
pub use git::GitVersionControl;
