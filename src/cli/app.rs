//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use super::commands;
use headerguard::output::OutputMode;

/// headerguard - File header and changelog checks for pre-commit hooks
#[derive(Parser, Debug)]
#[command(
    name = "headerguard",
    version,
    about = "File header and changelog checks for pre-commit hooks",
    long_about = "Validate staged files before committing.\n\n\
                  Every recognized file must open with a header block naming the\n\
                  changelog, today's date and the committer, and CHANGELOG.md must\n\
                  be staged alongside. Run without a subcommand to check."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate staged files (default; used by the pre-commit hook)
    Check,

    /// Install the pre-commit hook in the current repository
    Init {
        /// Overwrite an existing pre-commit hook
        #[arg(short, long)]
        force: bool,
    },

    /// Print a header block for a file, dated today and signed by you
    Template {
        /// File the header is for (its extension picks the format)
        path: String,
    },

    /// Fetch and summarize news
    #[cfg(feature = "news")]
    News {
        /// Ask a search-grounded model directly instead of fetching RSS first
        #[arg(long, global = true)]
        grounded: bool,

        #[command(subcommand)]
        action: NewsAction,
    },

    /// Show version
    Version,
}

#[cfg(feature = "news")]
#[derive(Subcommand, Debug)]
pub enum NewsAction {
    /// News about one company between two dates
    Company {
        /// Ticker symbol
        ticker: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: String,
    },

    /// Global and macroeconomic news
    Global {
        /// Current date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Number of days to look back
        #[arg(long, default_value_t = headerguard::core::services::news::DEFAULT_LOOKBACK_DAYS)]
        look_back: u32,

        /// Maximum number of articles
        #[arg(long, default_value_t = headerguard::core::services::news::DEFAULT_LIMIT)]
        limit: usize,
    },
}

/// Run the CLI, returning the process exit code
pub fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        None | Some(Command::Check) => commands::check(output_mode),
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Template { path }) => commands::template(&path, output_mode),
        #[cfg(feature = "news")]
        Some(Command::News { grounded, action }) => commands::news(action, grounded, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("headerguard v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(0)
        },
    }
}
