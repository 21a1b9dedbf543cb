//! Configuration types

use crate::constants::DEFAULT_LOG_LEVEL;
use recode_domain::constants::{DEFAULT_EXCLUDES, DEFAULT_PRESET};
use recode_domain::{Error, Result, Rule, RuleSet, preset};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One `[[rules]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Literal text to find
    pub find: String,
    /// Replacement text (empty deletes)
    #[serde(default)]
    pub replace: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}

/// Application configuration
///
/// ```toml
/// extensions = ["elm", "md"]
///
/// [[rules]]
/// find = "Ui.Element"
/// replace = "Dom.Element"
///
/// [[rules]]
/// find = "import Ui"
/// replace = "import Dom"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecodeConfig {
    /// Built-in rule table used when `rules` is empty
    pub preset: Option<String>,

    /// Rules in application order
    pub rules: Vec<RuleConfig>,

    /// Extensions to rewrite; empty keeps the preset's set
    pub extensions: Vec<String>,

    /// Root-relative paths never read or written, matched by whole component
    pub exclude: Vec<String>,

    /// Count matches without writing
    pub dry_run: bool,

    /// Rewrite the files of one rule in parallel
    pub parallel: bool,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Default for RecodeConfig {
    fn default() -> Self {
        Self {
            preset: None,
            rules: Vec::new(),
            extensions: Vec::new(),
            exclude: DEFAULT_EXCLUDES.iter().map(ToString::to_string).collect(),
            dry_run: false,
            parallel: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl RecodeConfig {
    /// Build the rule set this configuration describes.
    ///
    /// Explicit rules win over a preset. Without either, the default preset
    /// is used.
    pub fn resolve_rule_set(&self) -> Result<RuleSet> {
        if self.rules.is_empty() {
            let name = self.preset.as_deref().unwrap_or(DEFAULT_PRESET);
            let set = preset(name)?;
            if self.extensions.is_empty() {
                return Ok(set);
            }
            return set.with_extensions(&self.extensions);
        }

        if let Some(name) = &self.preset {
            warn!(preset = %name, "Both rules and a preset are configured; using rules");
        }
        if self.extensions.is_empty() {
            return Err(Error::NoExtensions);
        }

        let rules = self
            .rules
            .iter()
            .map(|r| Rule::new(r.find.as_str(), r.replace.as_str()))
            .collect();
        RuleSet::new(rules, &self.extensions)
    }
}
