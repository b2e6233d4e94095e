//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (git, the working tree, the clock, news and LLM
//! providers).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations, so the validator runs deterministically in tests with a
//! fixed date and identity.

mod clock;
mod news;
mod vcs;
mod workspace;

pub use clock::Clock;
pub use news::{NewsSource, Summarizer};
pub use vcs::VersionControl;
pub use workspace::Workspace;
