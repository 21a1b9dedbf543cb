//! Run progress port
//!
//! The runner announces every state transition through [`RunObserver`]. All
//! methods have empty default bodies so implementations only override what
//! they display.

use crate::error::Error;
use crate::value_objects::{RewriteStats, Rule, RunReport};

/// Receives progress notifications from a run, in order
pub trait RunObserver {
    /// Rule `index` is about to be applied
    fn rule_started(&mut self, _index: usize, _rule: &Rule) {}

    /// Rule `index` was applied to every matching file
    fn rule_completed(&mut self, _index: usize, _rule: &Rule, _stats: &RewriteStats) {}

    /// Rule `index` was applied but matched nothing. Called before
    /// [`rule_completed`](Self::rule_completed); never affects the outcome.
    fn rule_unmatched(&mut self, _index: usize, _rule: &Rule) {}

    /// Rule `index` failed; no further rules will run
    fn rule_failed(&mut self, _index: usize, _rule: &Rule, _error: &Error) {}

    /// The run reached a terminal state
    fn run_finished(&mut self, _report: &RunReport) {}
}

/// Observer that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
