//! Fetch and summarize news (feature `news`)

use headerguard::adapters::news::{GeminiClient, GoogleNewsRss, model_from_env};
use headerguard::core::services::{NewsService, Strategy};
use headerguard::output::OutputMode;

use crate::cli::app::NewsAction;

/// Run a news query and print the digest
pub fn news(action: NewsAction, grounded: bool, mode: OutputMode) -> anyhow::Result<i32> {
    let strategy = if grounded {
        Strategy::Grounded
    } else {
        Strategy::FetchThenSummarize
    };

    let summarizer = GeminiClient::from_env().grounded(grounded);
    let service = NewsService::new(GoogleNewsRss::new(), summarizer)
        .with_model(model_from_env())
        .with_strategy(strategy);

    let runtime = tokio::runtime::Runtime::new()?;
    let digest = runtime.block_on(async {
        match &action {
            NewsAction::Company { ticker, start, end } => {
                service.company_news(ticker, start, end).await
            },
            NewsAction::Global {
                date,
                look_back,
                limit,
            } => service.global_news(date, *look_back, *limit).await,
        }
    });

    if mode == OutputMode::Json {
        println!("{}", serde_json::json!({ "found": !digest.is_empty(), "digest": digest }));
    } else if digest.is_empty() {
        eprintln!("No news found.");
    } else {
        println!("{digest}");
    }

    Ok(i32::from(digest.is_empty()))
}
