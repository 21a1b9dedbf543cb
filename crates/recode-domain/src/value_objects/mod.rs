//! Domain Value Objects
//!
//! Immutable values describing a migration and its outcome.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Rule`] | One literal find/replace pair |
//! | [`RuleSet`] | Ordered rules plus the extension filter |
//! | [`RewriteStats`] | What one rule did across a tree |
//! | [`RunReport`] | Aggregate outcome of a run |

/// Rule and rule set definitions
pub mod rule;
/// Ordered rule collections
pub mod rule_set;
/// Run state machine and reports
pub mod report;
/// Per-rule rewrite statistics
pub mod stats;

pub use report::{RuleOutcome, RuleReport, RunReport, RunState, RunSummary};
pub use rule::Rule;
pub use rule_set::RuleSet;
pub use stats::RewriteStats;
