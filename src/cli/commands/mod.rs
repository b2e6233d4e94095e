//! Command implementations

mod check;
mod init;
#[cfg(feature = "news")]
mod news;
mod template;

pub use check::check;
pub use init::init;
#[cfg(feature = "news")]
pub use news::news;
pub use template::template;
