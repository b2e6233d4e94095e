//! News and language-model adapters (feature `news`)
//!
//! - [`google_news`] - Google News RSS search as a `NewsSource`
//! - [`gemini`] - Gemini `generateContent` as a `Summarizer`

pub mod gemini;
pub mod google_news;

pub use gemini::GeminiClient;
pub use google_news::GoogleNewsRss;

use crate::core::services::news::DEFAULT_MODEL;

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Environment variable selecting the Gemini model
pub const MODEL_ENV: &str = "GEMINI_WEB_MODEL";

/// Model configured in the environment, or the default
#[must_use]
pub fn model_from_env() -> String {
    std::env::var(MODEL_ENV)
        .ok()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}
