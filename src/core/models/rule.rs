//! Header rules per file extension

use serde::{Deserialize, Serialize};

/// Comment convention a recognized file type must follow near its top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleClass {
    /// `#`-prefixed lines (scripts, YAML)
    LineComment,
    /// `<!--` block (Markdown)
    MarkupComment,
    /// `_metadata` key (JSON)
    StructuredData,
}

impl RuleClass {
    /// How many leading lines may carry the comment token
    pub const COMMENT_WINDOW: usize = 3;

    /// Reason reported when the convention is not met
    #[must_use]
    pub const fn failure_reason(self) -> &'static str {
        match self {
            Self::LineComment => "Header comment block not found at top",
            Self::MarkupComment => "Markdown header comment block not found at top",
            Self::StructuredData => "JSON files must include _metadata header block",
        }
    }

    /// Whether the leading lines follow this convention
    #[must_use]
    pub fn convention_met(self, lines: &[String]) -> bool {
        let window = &lines[..lines.len().min(Self::COMMENT_WINDOW)];
        match self {
            Self::LineComment => window.iter().any(|l| l.trim().starts_with('#')),
            Self::MarkupComment => window.iter().any(|l| l.contains("<!--")),
            Self::StructuredData => lines.iter().any(|l| l.contains("_metadata")),
        }
    }
}

impl std::fmt::Display for RuleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LineComment => write!(f, "line-comment"),
            Self::MarkupComment => write!(f, "markup-comment"),
            Self::StructuredData => write!(f, "structured-data"),
        }
    }
}

impl std::str::FromStr for RuleClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line-comment" => Ok(Self::LineComment),
            "markup-comment" => Ok(Self::MarkupComment),
            "structured-data" => Ok(Self::StructuredData),
            _ => Err(format!(
                "Invalid rule class: {s}. Use: line-comment, markup-comment, structured-data"
            )),
        }
    }
}

/// An extension bound to its rule class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRule {
    /// Lower-cased extension without the dot
    pub extension: String,
    /// Convention files with this extension follow
    pub class: RuleClass,
}
