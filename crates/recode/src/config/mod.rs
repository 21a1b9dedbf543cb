//! Configuration Module
//!
//! Rules, extensions and run options come from, in increasing priority:
//! built-in defaults, a `recode.toml` file, `RECODE_*` environment variables
//! and command line flags.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LoggingConfig, RecodeConfig, RuleConfig};
