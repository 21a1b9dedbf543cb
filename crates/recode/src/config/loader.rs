//! Configuration loader
//!
//! Uses Figment to merge defaults, a TOML file and environment variables.

use crate::config::RecodeConfig;
use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_FILENAME};
use crate::logging::parse_log_level;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use recode_domain::{Error, Result};
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Explicit configuration file path
    config_path: Option<PathBuf>,

    /// Directory searched for the default configuration file
    root: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            root: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path (it must exist)
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Look for `recode.toml` in `root` when no explicit path is set
    pub fn with_root<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.root = Some(root.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// The configuration file that `load` reads, if any
    pub fn config_file(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config_path {
            return Some(path.clone());
        }
        self.root
            .as_ref()
            .map(|root| root.join(DEFAULT_CONFIG_FILENAME))
            .filter(|path| path.is_file())
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `RecodeConfig::default()`
    /// 2. TOML configuration file (explicit path, or `<root>/recode.toml`)
    /// 3. Environment variables with prefix (e.g., `RECODE_DRY_RUN`,
    ///    `RECODE_LOGGING__LEVEL` for nested keys)
    pub fn load(&self) -> Result<RecodeConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(RecodeConfig::default()));

        if let Some(path) = self.config_file() {
            if !path.is_file() {
                return Err(Error::configuration(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            figment = figment.merge(Toml::file(&path));
        }

        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("__"));

        let config: RecodeConfig = figment
            .extract()
            .map_err(|e| Error::configuration_with_source("Failed to extract configuration", e))?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Serialize a configuration as TOML
    pub fn to_toml(config: &RecodeConfig) -> Result<String> {
        toml::to_string_pretty(config)
            .map_err(|e| Error::configuration_with_source("Failed to serialize config to TOML", e))
    }
}

fn validate_config(config: &RecodeConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;

    if let Some(index) = config.rules.iter().position(|r| r.find.is_empty()) {
        return Err(Error::EmptyPattern { index });
    }
    Ok(())
}
