//! News retrieval and summarization ports
//!
//! Both ports may fail; the [`NewsService`](crate::core::services::NewsService)
//! absorbs every failure so nothing crosses its boundary as an error.

use std::future::Future;

use chrono::NaiveDate;

use crate::error::Result;

/// A provider of raw news text
pub trait NewsSource {
    /// Fetch news matching `query` published in the `lookback_days` before
    /// `as_of`, at most `limit` items, as one plain-text digest.
    ///
    /// An empty string means nothing was found.
    fn fetch(
        &self,
        query: &str,
        as_of: NaiveDate,
        lookback_days: u32,
        limit: usize,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// A hosted language model able to summarize text
pub trait Summarizer {
    /// Whether the summarizer can be called at all (credentials present)
    fn available(&self) -> bool;

    /// Run `prompt` against `model` and return the generated text
    fn summarize(&self, prompt: &str, model: &str) -> impl Future<Output = Result<String>> + Send;
}
