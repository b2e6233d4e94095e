//! Gemini `generateContent` client

use serde::Deserialize;

use super::API_KEY_ENV;
use crate::core::ports::Summarizer;
use crate::error::{Error, Result};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// `Summarizer` backed by the Gemini REST API
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    grounded: bool,
}

impl GeminiClient {
    /// Create a client with an explicit key (`None` means unavailable)
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: API_BASE.to_string(),
            grounded: false,
        }
    }

    /// Create a client using `GOOGLE_API_KEY`
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_KEY_ENV).ok())
    }

    /// Enable the Google Search tool so answers are grounded in live results
    #[must_use]
    pub const fn grounded(mut self, grounded: bool) -> Self {
        self.grounded = grounded;
        self
    }

    /// Point at another API base (proxies, tests)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn request_body(&self, prompt: &str) -> serde_json::Value {
        let mut body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });
        if self.grounded {
            body["tools"] = serde_json::json!([{ "google_search": {} }]);
        }
        body
    }
}

impl Summarizer for GeminiClient {
    fn available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn summarize(&self, prompt: &str, model: &str) -> Result<String> {
        let Some(key) = &self.api_key else {
            return Err(Error::Provider {
                provider: "gemini",
                message: format!("{API_KEY_ENV} is not set"),
            });
        };

        let url = format!("{}/models/{model}:generateContent", self.base_url);
        log::debug!("POST {url} (grounded: {})", self.grounded);

        let response: GenerateResponse = self
            .client
            .post(url)
            .header("x-goog-api-key", key)
            .json(&self.request_body(prompt))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.text())
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, parts concatenated
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.iter().filter_map(|p| p.text.as_deref()).collect())
            .unwrap_or_default()
    }
}
