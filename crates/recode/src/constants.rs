//! Binary constants

/// Prefix of environment variables read by the configuration loader
pub const CONFIG_ENV_PREFIX: &str = "RECODE";

/// Configuration file looked up in the root when `--config` is not given
pub const DEFAULT_CONFIG_FILENAME: &str = "recode.toml";

/// Environment variable holding a full tracing filter directive
pub const LOG_ENV_VAR: &str = "RECODE_LOG";

/// Default log level (logs go to stderr; progress stays on stdout)
pub const DEFAULT_LOG_LEVEL: &str = "warn";
