//! Print a header block for a file

use std::path::Path;

use anyhow::Context;

use headerguard::Error;
use headerguard::adapters::{GitVersionControl, SystemClock};
use headerguard::config::Config;
use headerguard::core::models::StagedFile;
use headerguard::core::ports::{Clock, VersionControl};
use headerguard::core::services::render_template;
use headerguard::output::OutputMode;

/// Print a ready-to-paste header for `path`
pub fn template(path: &str, mode: OutputMode) -> anyhow::Result<i32> {
    let vcs = GitVersionControl::current_dir()?;
    let root = vcs.repo_root().context("failed to locate repository root")?;
    let config = Config::load(&root)?;

    let file = StagedFile::new(path, Path::new(path).exists());
    let rule = config
        .header_rule(&file)
        .ok_or_else(|| Error::UnsupportedFile(file.path.clone()))?;

    let identity = vcs.identity()?;
    let header = render_template(rule.class, SystemClock.today(), &identity);

    match mode {
        OutputMode::Human => print!("{header}"),
        OutputMode::Json => println!(
            "{}",
            serde_json::json!({
                "path": path,
                "rule": rule.class.to_string(),
                "header": header,
            })
        ),
    }

    Ok(0)
}
