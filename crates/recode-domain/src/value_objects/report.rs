//! Run state machine and reports

use crate::constants::{EXIT_RULE_FAILED, EXIT_SUCCESS};
use crate::value_objects::{RewriteStats, Rule};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where a run is.
///
/// `Idle -> Running(0) -> Running(1) -> ... -> Done`, or from any
/// `Running(i)` straight to `Failed { index: i, .. }`. `Done` and `Failed`
/// are terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RunState {
    /// Nothing has run yet
    Idle,
    /// Rule `index` is being applied
    Running {
        /// Zero-based rule index
        index: usize,
    },
    /// Every rule was applied
    Done,
    /// Rule `index` failed; later rules were not attempted
    Failed {
        /// Zero-based index of the failing rule
        index: usize,
        /// Rendered failure reason
        reason: String,
    },
}

impl RunState {
    /// Leave `Idle` for the first rule, or finish at once if there are none
    pub fn begin(self, total: usize) -> Self {
        match self {
            Self::Idle if total == 0 => Self::Done,
            Self::Idle => Self::Running { index: 0 },
            other => other,
        }
    }

    /// The current rule succeeded: move on to the next one or finish
    pub fn advance(self, total: usize) -> Self {
        match self {
            Self::Running { index } if index + 1 >= total => Self::Done,
            Self::Running { index } => Self::Running { index: index + 1 },
            other => other,
        }
    }

    /// The current rule failed
    pub fn fail(self, reason: impl Into<String>) -> Self {
        match self {
            Self::Running { index } => Self::Failed {
                index,
                reason: reason.into(),
            },
            other => other,
        }
    }

    /// Index of the rule being applied
    pub fn running_index(&self) -> Option<usize> {
        match self {
            Self::Running { index } => Some(*index),
            _ => None,
        }
    }

    /// True for `Done` and `Failed`
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed { .. })
    }
}

/// Result of applying one rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RuleOutcome {
    /// Every matching file was processed
    Applied {
        /// Counters for this rule
        stats: RewriteStats,
    },
    /// A file could not be read or written
    Failed {
        /// Rendered failure reason
        reason: String,
        /// The failing file, when known
        path: Option<PathBuf>,
    },
}

impl RuleOutcome {
    /// True for `Applied`
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// One attempted rule and its outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleReport {
    /// Zero-based position in the rule set
    pub index: usize,
    /// The rule that was attempted
    pub rule: Rule,
    /// What happened
    pub outcome: RuleOutcome,
}

/// Summary of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Rules in the rule set
    pub rules_total: usize,
    /// Rules applied successfully
    pub rules_applied: usize,
    /// Rules never attempted because an earlier rule failed
    pub rules_skipped: usize,
    /// Sum of changed files over applied rules
    pub files_changed: usize,
    /// Sum of replacements over applied rules
    pub replacements: usize,
    /// Whether every rule was applied
    pub passed: bool,
}

/// Aggregate outcome of a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Timestamp of the run (RFC 3339)
    pub timestamp: String,
    /// Root of the migrated tree
    pub root: PathBuf,
    /// Whether files were left untouched
    pub dry_run: bool,
    /// Attempted rules, in order
    pub rules: Vec<RuleReport>,
    /// Terminal state
    pub state: RunState,
    /// Summary statistics
    pub summary: RunSummary,
}

impl RunReport {
    /// Assemble a report and compute its summary
    pub fn new(
        root: impl Into<PathBuf>,
        dry_run: bool,
        rules_total: usize,
        rules: Vec<RuleReport>,
        state: RunState,
    ) -> Self {
        let mut totals = RewriteStats::default();
        let mut rules_applied = 0;
        for report in &rules {
            if let RuleOutcome::Applied { stats } = &report.outcome {
                rules_applied += 1;
                totals += *stats;
            }
        }
        let attempted = rules.len();

        let summary = RunSummary {
            rules_total,
            rules_applied,
            rules_skipped: rules_total.saturating_sub(attempted),
            files_changed: totals.files_changed,
            replacements: totals.replacements,
            passed: state == RunState::Done,
        };

        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            root: root.into(),
            dry_run,
            rules,
            state,
            summary,
        }
    }

    /// Whether every rule was applied
    pub fn passed(&self) -> bool {
        self.summary.passed
    }

    /// The report of the failing rule, if the run failed
    pub fn failure(&self) -> Option<&RuleReport> {
        self.rules.iter().find(|r| !r.outcome.is_applied())
    }

    /// Process exit code for this run
    pub fn exit_code(&self) -> u8 {
        if self.passed() {
            EXIT_SUCCESS
        } else {
            EXIT_RULE_FAILED
        }
    }
}
