//! Sequential rule driver.
//!
//! Rules run strictly one after another: rule `n + 1` starts only after rule
//! `n` has finished with every file, since it may depend on text rule `n`
//! introduced. The first failing rule ends the run. Nothing is rolled back.

use crate::rewriter::Rewriter;
use crate::scan;
use recode_domain::{
    Result, RuleOutcome, RuleReport, RuleSet, RunObserver, RunReport, RunState,
};
use tracing::{error, info, warn};

/// Drives a [`RuleSet`] through a [`Rewriter`]
#[derive(Debug, Clone)]
pub struct Runner {
    rewriter: Rewriter,
}

impl Runner {
    /// Runner writing through `rewriter`
    pub fn new(rewriter: Rewriter) -> Self {
        Self { rewriter }
    }

    /// The rewriter in use
    pub fn rewriter(&self) -> &Rewriter {
        &self.rewriter
    }

    /// Apply every rule in order.
    ///
    /// A missing root is reported as an error before any rule starts. A rule
    /// failure is not an error here: it ends the run and shows up in the
    /// report as `RunState::Failed`.
    pub fn run(&self, rule_set: &RuleSet, observer: &mut dyn RunObserver) -> Result<RunReport> {
        scan::ensure_root(self.rewriter.root())?;
        self.rewriter.discard_staged();

        let total = rule_set.len();
        let mut reports = Vec::with_capacity(total);
        let mut state = RunState::Idle.begin(total);

        info!(
            root = %self.rewriter.root().display(),
            rules = total,
            dry_run = self.rewriter.is_dry_run(),
            "Starting run"
        );

        while let Some(index) = state.running_index() {
            let rule = &rule_set.rules()[index];
            observer.rule_started(index, rule);
            info!(index, find = rule.find(), replace = rule.replace(), "Applying rule");

            match self.rewriter.apply(rule, rule_set.extensions()) {
                Ok(stats) => {
                    if stats.is_unmatched() {
                        warn!(index, find = rule.find(), "Rule matched nothing");
                        observer.rule_unmatched(index, rule);
                    }
                    observer.rule_completed(index, rule, &stats);
                    reports.push(RuleReport {
                        index,
                        rule: rule.clone(),
                        outcome: RuleOutcome::Applied { stats },
                    });
                    state = state.advance(total);
                }
                Err(err) => {
                    error!(index, find = rule.find(), error = %err, "Rule failed, stopping");
                    observer.rule_failed(index, rule, &err);
                    let reason = err.to_string();
                    reports.push(RuleReport {
                        index,
                        rule: rule.clone(),
                        outcome: RuleOutcome::Failed {
                            reason: reason.clone(),
                            path: err.path().map(ToOwned::to_owned),
                        },
                    });
                    state = state.fail(reason);
                }
            }
        }

        let report = RunReport::new(
            self.rewriter.root(),
            self.rewriter.is_dry_run(),
            total,
            reports,
            state,
        );
        info!(
            passed = report.passed(),
            applied = report.summary.rules_applied,
            replacements = report.summary.replacements,
            "Run finished"
        );
        observer.run_finished(&report);

        Ok(report)
    }
}
