//! Google News RSS search

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::core::ports::NewsSource;
use crate::core::services::header::DATE_FORMAT;
use crate::core::services::news::window_start;
use crate::error::{Error, Result};

const RSS_SEARCH_URL: &str = "https://news.google.com/rss/search";

static ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<item>(.*?)</item>").expect("valid item pattern"));
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<title>(.*?)</title>").expect("valid title pattern"));
static SOURCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<source[^>]*>(.*?)</source>").expect("valid source pattern"));
static PUB_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<pubDate>(.*?)</pubDate>").expect("valid pubDate pattern"));
static CHAR_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&#(?:[xX]([0-9a-fA-F]{1,6})|([0-9]{1,7}));").expect("valid char ref pattern")
});

/// One article from the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    /// Headline
    pub title: String,
    /// Publisher name, when present
    pub source: Option<String>,
    /// Publication date as printed by the feed
    pub published: Option<String>,
}

/// `NewsSource` backed by the Google News RSS search endpoint
#[derive(Debug, Clone)]
pub struct GoogleNewsRss {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleNewsRss {
    /// Create a source using the public endpoint
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(RSS_SEARCH_URL)
    }

    /// Create a source against another endpoint
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for GoogleNewsRss {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsSource for GoogleNewsRss {
    async fn fetch(
        &self,
        query: &str,
        as_of: NaiveDate,
        lookback_days: u32,
        limit: usize,
    ) -> Result<String> {
        let (q, start) = search_query(query, as_of, lookback_days)?;

        let url = reqwest::Url::parse_with_params(
            &self.base_url,
            &[("q", q.as_str()), ("hl", "en-US"), ("gl", "US"), ("ceid", "US:en")],
        )
        .map_err(|e| Error::Provider {
            provider: "google-news",
            message: e.to_string(),
        })?;

        log::debug!("fetching {url}");
        let body = self.client.get(url).send().await?.error_for_status()?.text().await?;
        let items = parse_feed(&body, limit);
        log::debug!("{} item(s) for {query:?}", items.len());

        Ok(format_digest(query, start, as_of, &items))
    }
}

/// Search text restricting `query` to the window, with the window's first day
///
/// Google's `before:` is exclusive, so it names the day after `as_of`.
pub fn search_query(
    query: &str,
    as_of: NaiveDate,
    lookback_days: u32,
) -> Result<(String, NaiveDate)> {
    let out_of_range = || Error::Provider {
        provider: "google-news",
        message: format!("look-back of {lookback_days} day(s) from {as_of} is out of range"),
    };
    let start = window_start(as_of, lookback_days).ok_or_else(out_of_range)?;
    let before = as_of.succ_opt().ok_or_else(out_of_range)?;

    let q = format!(
        "{query} after:{} before:{}",
        start.format(DATE_FORMAT),
        before.format(DATE_FORMAT)
    );
    Ok((q, start))
}

/// Extract up to `limit` items from an RSS document
#[must_use]
pub fn parse_feed(xml: &str, limit: usize) -> Vec<NewsItem> {
    ITEM_RE
        .captures_iter(xml)
        .filter_map(|item| {
            let body = item.get(1)?.as_str();
            let title = capture(&TITLE_RE, body)?;
            Some(NewsItem {
                title,
                source: capture(&SOURCE_RE, body),
                published: capture(&PUB_DATE_RE, body),
            })
        })
        .take(limit)
        .collect()
}

/// Render items as a plain-text digest; empty when there are none
#[must_use]
pub fn format_digest(query: &str, start: NaiveDate, end: NaiveDate, items: &[NewsItem]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut out = format!(
        "## {query} Google News, from {} to {}:\n\n",
        start.format(DATE_FORMAT),
        end.format(DATE_FORMAT)
    );
    for item in items {
        match &item.source {
            Some(source) => out.push_str(&format!("### {} (source: {source})\n", item.title)),
            None => out.push_str(&format!("### {}\n", item.title)),
        }
        if let Some(published) = &item.published {
            out.push_str(published);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    let raw = re.captures(text)?.get(1)?.as_str().trim();
    let raw = raw
        .strip_prefix("<![CDATA[")
        .and_then(|r| r.strip_suffix("]]>"))
        .unwrap_or(raw);
    let value = unescape(raw);
    (!value.is_empty()).then_some(value)
}

fn unescape(s: &str) -> String {
    let decoded = CHAR_REF_RE.replace_all(s, |caps: &regex::Captures<'_>| {
        let code = match (caps.get(1), caps.get(2)) {
            (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
            (None, Some(dec)) => dec.as_str().parse().ok(),
            (None, None) => None,
        };
        code.and_then(char::from_u32)
            .map_or_else(|| caps[0].to_string(), String::from)
    });

    // `&amp;` last, so an escaped reference stays literal
    decoded
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
