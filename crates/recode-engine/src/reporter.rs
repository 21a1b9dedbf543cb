//! Run Report Generation
//!
//! Renders reports in two formats:
//! - JSON for scripts and CI
//! - Human-readable for terminal output

use recode_domain::{RuleOutcome, RuleSet, RunReport, RunState};
use std::fmt::Write;

/// Report generator
pub struct Reporter;

impl Reporter {
    /// Generate JSON report
    pub fn to_json(report: &RunReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Generate human-readable report
    pub fn to_human_readable(report: &RunReport) -> String {
        let mut output = String::new();

        output.push_str("=== Migration Report ===\n\n");
        let _ = writeln!(output, "Timestamp: {}", report.timestamp);
        let _ = writeln!(output, "Root:      {}", report.root.display());
        if report.dry_run {
            output.push_str("Mode:      dry run (no files written)\n");
        }
        output.push('\n');

        output.push_str("--- Rules ---\n");
        for rule_report in &report.rules {
            match &rule_report.outcome {
                RuleOutcome::Applied { stats } => {
                    let _ = writeln!(
                        output,
                        "  [{:>2}] OK     {}  ({} replacements in {} of {} files)",
                        rule_report.index + 1,
                        rule_report.rule,
                        stats.replacements,
                        stats.files_changed,
                        stats.files_scanned
                    );
                }
                RuleOutcome::Failed { reason, .. } => {
                    let _ = writeln!(
                        output,
                        "  [{:>2}] FAILED {}  ({})",
                        rule_report.index + 1,
                        rule_report.rule,
                        reason
                    );
                }
            }
        }
        output.push('\n');

        output.push_str("--- Summary ---\n");
        let summary = &report.summary;
        let _ = writeln!(
            output,
            "Rules:        {} applied, {} skipped, {} total",
            summary.rules_applied, summary.rules_skipped, summary.rules_total
        );
        let _ = writeln!(output, "Files changed: {}", summary.files_changed);
        let _ = writeln!(output, "Replacements:  {}", summary.replacements);

        match &report.state {
            RunState::Failed { index, .. } => {
                let _ = writeln!(output, "\nResult: FAILED at rule {}", index + 1);
            }
            _ => output.push_str("\nResult: PASSED\n"),
        }

        output
    }

    /// Numbered table of the rules in a rule set, in application order
    pub fn rule_table(rule_set: &RuleSet) -> String {
        let mut output = String::new();
        let extensions: Vec<&str> = rule_set.extensions().iter().map(String::as_str).collect();
        let _ = writeln!(output, "Extensions: {}", extensions.join(", "));
        for (index, rule) in rule_set.iter().enumerate() {
            let _ = writeln!(output, "{:>3}. {}", index + 1, rule);
        }
        output
    }
}
