//! Domain layer constants

/// Name of the preset used when neither rules nor a preset are configured
pub const DEFAULT_PRESET: &str = "elm-dom";

/// Path fragments skipped while walking a tree unless configured otherwise
pub const DEFAULT_EXCLUDES: &[&str] = &[".git/", "node_modules/", "elm-stuff/", "target/"];

/// Exit code for a run where every rule was applied
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code for a run that stopped on a failing rule
pub const EXIT_RULE_FAILED: u8 = 1;

/// Exit code for configuration or usage errors (nothing was touched)
pub const EXIT_CONFIGURATION: u8 = 2;
