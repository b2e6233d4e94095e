//! Validator configuration
//!
//! The rule set is fixed by default. A `.headerguard.toml` at the repository
//! root may add exempt names, extra extension rules, and tweak the prefix
//! length or remediation hint. Defaults are never removed.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::models::{HeaderRule, RuleClass, StagedFile};
use crate::error::{Error, Result};

/// Configuration file name, looked up at the repository root
pub const CONFIG_FILE: &str = ".headerguard.toml";

/// Changelog file name that must accompany documentable changes
pub const DEFAULT_CHANGELOG: &str = "CHANGELOG.md";

/// Number of leading lines read from each staged file
pub const DEFAULT_PREFIX_LINES: usize = 20;

/// Hint printed after the failure list
pub const DEFAULT_REMEDIATION: &str =
    "Please update file headers per AGENTS.md/CRUSH.md and add CHANGELOG entry.";

const DEFAULT_EXEMPT_DIRS: [&str; 6] = [".git", ".idea", ".cursor", "venv", ".venv", "__pycache__"];
const DEFAULT_EXEMPT_FILES: [&str; 3] = ["LICENSE", "README.md", ".pre-commit-config.yaml"];

/// On-disk shape of `.headerguard.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Changelog file name override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changelog: Option<String>,
    /// Prefix length override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix_lines: Option<usize>,
    /// Remediation hint override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
    /// Extra exemptions
    #[serde(default)]
    pub exempt: ExemptSection,
    /// Extra extension rules, keyed by extension with leading dot
    #[serde(default)]
    pub rules: BTreeMap<String, RuleClass>,
}

/// `[exempt]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExemptSection {
    /// Directory names exempt anywhere in a path
    #[serde(default)]
    pub dirs: Vec<String>,
    /// File names exempt wherever they live
    #[serde(default)]
    pub files: Vec<String>,
}

/// Effective, read-only rule configuration for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Changelog file name (matched by file name, not path)
    pub changelog: String,
    /// Lines read from disk per file
    pub prefix_lines: usize,
    /// Remediation hint for the human report
    pub remediation: String,
    /// Exempt directory names
    pub exempt_dirs: BTreeSet<String>,
    /// Exempt file names (always includes the changelog)
    pub exempt_files: BTreeSet<String>,
    /// Lower-cased extension (without dot) to rule class
    pub rules: BTreeMap<String, RuleClass>,
}

impl Default for Config {
    fn default() -> Self {
        let rules = [
            ("py", RuleClass::LineComment),
            ("yml", RuleClass::LineComment),
            ("yaml", RuleClass::LineComment),
            ("md", RuleClass::MarkupComment),
            ("json", RuleClass::StructuredData),
        ]
        .into_iter()
        .map(|(ext, class)| (ext.to_string(), class))
        .collect();

        let mut exempt_files: BTreeSet<String> =
            DEFAULT_EXEMPT_FILES.iter().map(ToString::to_string).collect();
        exempt_files.insert(DEFAULT_CHANGELOG.to_string());

        Self {
            changelog: DEFAULT_CHANGELOG.to_string(),
            prefix_lines: DEFAULT_PREFIX_LINES,
            remediation: DEFAULT_REMEDIATION.to_string(),
            exempt_dirs: DEFAULT_EXEMPT_DIRS.iter().map(ToString::to_string).collect(),
            exempt_files,
            rules,
        }
    }
}

impl Config {
    /// Path of the config file under a repository root
    #[must_use]
    pub fn path_in(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    /// Load the config for a repository root, falling back to defaults when
    /// no config file exists
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::path_in(root);
        if !path.exists() {
            log::debug!("no {CONFIG_FILE} under {}, using defaults", root.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let file: ConfigFile = toml::from_str(&content).map_err(|e| Error::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;
        log::debug!("loaded {}", path.display());
        Ok(Self::from_file(file))
    }

    /// Merge a parsed config file over the defaults
    #[must_use]
    pub fn from_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(changelog) = file.changelog.filter(|c| !c.trim().is_empty()) {
            config.exempt_files.remove(&config.changelog);
            config.changelog = changelog.trim().to_string();
            config.exempt_files.insert(config.changelog.clone());
        }
        if let Some(n) = file.prefix_lines.filter(|n| *n > 0) {
            config.prefix_lines = n;
        }
        if let Some(hint) = file.remediation {
            config.remediation = hint;
        }

        config.exempt_dirs.extend(file.exempt.dirs);
        config.exempt_files.extend(file.exempt.files);

        for (ext, class) in file.rules {
            let ext = ext.trim_start_matches('.').to_lowercase();
            if !ext.is_empty() {
                config.rules.insert(ext, class);
            }
        }

        config
    }

    /// Rule class for a lower-cased extension (without dot)
    #[must_use]
    pub fn rule_for(&self, extension: &str) -> Option<RuleClass> {
        self.rules.get(extension).copied()
    }

    /// Header rule applying to a staged file, if its extension is recognized
    #[must_use]
    pub fn header_rule(&self, file: &StagedFile) -> Option<HeaderRule> {
        self.rule_for(&file.extension).map(|class| HeaderRule {
            extension: file.extension.clone(),
            class,
        })
    }
}
