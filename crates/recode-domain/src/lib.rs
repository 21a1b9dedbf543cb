//! # recode domain
//!
//! Core types for literal, order-sensitive source migrations.
//!
//! A migration is a [`RuleSet`]: an ordered list of [`Rule`]s (literal
//! find/replace pairs) plus the file extensions they apply to. The engine
//! crate applies the rules one after another over a directory tree and
//! records what happened in a [`RunReport`].
//!
//! ## Modules
//!
//! - `value_objects` - rules, rule sets, per-rule statistics and run reports
//! - `ports` - the [`RunObserver`] progress interface
//! - `presets` - built-in rule tables
//! - `error` - the error taxonomy shared by every crate in the workspace

/// Domain constants
pub mod constants;
/// Error handling types
pub mod error;
/// Progress reporting interfaces
pub mod ports;
/// Built-in migration rule tables
pub mod presets;
/// Immutable rule and report types
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{NoopObserver, RunObserver};
pub use presets::{PRESET_NAMES, preset};
pub use value_objects::{
    RewriteStats, Rule, RuleOutcome, RuleReport, RuleSet, RunReport, RunState, RunSummary,
};
