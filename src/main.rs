//! headerguard - A pre-commit hook that keeps file headers and the changelog honest
//!
//! Exit codes: 0 when every check passes, 1 when validation fails, 2 when the
//! environment prevents a run (not a repository, identity unset, bad config).

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Exit code for environment failures
const EXIT_FATAL: i32 = 2;

/// Main entry point for the headerguard CLI
fn main() {
    let code = match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            EXIT_FATAL
        },
    };
    std::process::exit(code);
}
