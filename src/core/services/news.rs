//! News retrieval and summarization service
//!
//! A thin call-and-fallback layer over a [`NewsSource`] and a [`Summarizer`].
//! The only failure signal is an empty string: invalid dates, no news, and a
//! failing provider all look the same to callers. When summarization is
//! unavailable the raw digest is returned instead.

use chrono::{Days, NaiveDate};

use crate::core::ports::{NewsSource, Summarizer};

use super::header::DATE_FORMAT;

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Query used for global market news
pub const GLOBAL_NEWS_QUERY: &str = "global OR macroeconomics OR markets OR stocks";

/// Default look-back window for global news, in days
pub const DEFAULT_LOOKBACK_DAYS: u32 = 7;

/// Default number of articles for global news
pub const DEFAULT_LIMIT: usize = 5;

const SUMMARY_INSTRUCTIONS: &str = "You are a financial news analyst. Summarize the following \
news snippets into a concise, source-aware report with bullet points, keeping dates and titles \
when available. Avoid speculation and do not fabricate sources.";

/// How the service produces its digest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Fetch raw news from the source, then summarize it
    #[default]
    FetchThenSummarize,
    /// Ask a search-grounded model directly; the source is not consulted
    Grounded,
}

/// Fetches news and optionally condenses it with a language model
#[derive(Debug)]
pub struct NewsService<S, M> {
    source: S,
    summarizer: M,
    model: String,
    strategy: Strategy,
}

impl<S, M> NewsService<S, M>
where
    S: NewsSource + Sync,
    M: Summarizer + Sync,
{
    /// Create a service using the default model and strategy
    #[must_use]
    pub fn new(source: S, summarizer: M) -> Self {
        Self {
            source,
            summarizer,
            model: DEFAULT_MODEL.to_string(),
            strategy: Strategy::default(),
        }
    }

    /// Use a specific model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Use a specific strategy
    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The underlying news source
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// The underlying summarizer
    #[must_use]
    pub const fn summarizer(&self) -> &M {
        &self.summarizer
    }

    /// Digest of news for `query` in the `lookback_days` before `as_of_date`
    /// (`YYYY-MM-DD`), at most `result_limit` items. Empty on any failure.
    pub async fn fetch_and_summarize(
        &self,
        query: &str,
        as_of_date: &str,
        lookback_days: u32,
        result_limit: usize,
    ) -> String {
        let Some(as_of) = parse_date(as_of_date) else {
            log::debug!("invalid as-of date {as_of_date:?}");
            return String::new();
        };
        let Some(start) = window_start(as_of, lookback_days) else {
            log::debug!("look-back of {lookback_days} day(s) from {as_of} is out of range");
            return String::new();
        };

        match self.strategy {
            Strategy::FetchThenSummarize => {
                let raw = match self.source.fetch(query, as_of, lookback_days, result_limit).await {
                    Ok(raw) => raw,
                    Err(e) => {
                        log::warn!("news fetch for {query:?} failed: {e}");
                        return String::new();
                    },
                };
                if raw.trim().is_empty() {
                    return String::new();
                }
                self.summarize(raw).await
            },
            Strategy::Grounded => self.grounded(query, start, as_of, result_limit).await,
        }
    }

    /// Company news between `start_date` and `end_date` (inclusive,
    /// `YYYY-MM-DD`). Empty when either date is invalid or start is after end.
    pub async fn company_news(&self, ticker: &str, start_date: &str, end_date: &str) -> String {
        let (Some(start), Some(end)) = (parse_date(start_date), parse_date(end_date)) else {
            return String::new();
        };
        if start > end {
            log::debug!("start {start} after end {end}");
            return String::new();
        }

        let days = (end - start).num_days().max(1);
        let lookback = u32::try_from(days).unwrap_or(u32::MAX);
        self.fetch_and_summarize(ticker, end_date, lookback, DEFAULT_LIMIT).await
    }

    /// Global and macroeconomic news up to `curr_date`
    pub async fn global_news(&self, curr_date: &str, lookback_days: u32, limit: usize) -> String {
        self.fetch_and_summarize(GLOBAL_NEWS_QUERY, curr_date, lookback_days, limit).await
    }

    async fn summarize(&self, raw: String) -> String {
        if !self.summarizer.available() {
            return raw;
        }

        match self.summarizer.summarize(&summary_prompt(&raw), &self.model).await {
            Ok(summary) if !summary.trim().is_empty() => summary,
            Ok(_) => raw,
            Err(e) => {
                log::warn!("summarization with {} failed: {e}", self.model);
                raw
            },
        }
    }

    async fn grounded(
        &self,
        query: &str,
        start: NaiveDate,
        end: NaiveDate,
        limit: usize,
    ) -> String {
        if !self.summarizer.available() {
            return String::new();
        }

        let prompt = grounded_prompt(query, start, end, limit);
        match self.summarizer.summarize(&prompt, &self.model).await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("grounded generation with {} failed: {e}", self.model);
                String::new()
            },
        }
    }
}

/// Prompt wrapping raw snippets for summarization
#[must_use]
pub fn summary_prompt(content: &str) -> String {
    format!(
        "{SUMMARY_INSTRUCTIONS}\n\n=== NEWS SNIPPETS START ===\n{content}\n\
         === NEWS SNIPPETS END ==="
    )
}

/// Prompt asking a search-grounded model to find and summarize news itself
#[must_use]
pub fn grounded_prompt(query: &str, start: NaiveDate, end: NaiveDate, limit: usize) -> String {
    format!(
        "Search the web for news about {query} published between {} and {}. \
         Report at most {limit} relevant articles. {SUMMARY_INSTRUCTIONS} \
         If nothing relevant was published in that window, reply with an empty message.",
        start.format(DATE_FORMAT),
        end.format(DATE_FORMAT),
    )
}

/// First day of a `lookback_days` window ending at `as_of`, or `None` when
/// it falls outside the representable calendar
#[must_use]
pub fn window_start(as_of: NaiveDate, lookback_days: u32) -> Option<NaiveDate> {
    as_of.checked_sub_days(Days::new(u64::from(lookback_days)))
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}
