//! Tests for report rendering

use recode_domain::{RewriteStats, Rule, RuleOutcome, RuleReport, RunReport, RunState, preset};
use recode_engine::Reporter;

fn failed_report() -> RunReport {
    let rules = vec![
        RuleReport {
            index: 0,
            rule: Rule::new("Ui", "Dom"),
            outcome: RuleOutcome::Applied {
                stats: RewriteStats {
                    files_scanned: 3,
                    files_changed: 2,
                    replacements: 5,
                },
            },
        },
        RuleReport {
            index: 1,
            rule: Rule::new("a", "b"),
            outcome: RuleOutcome::Failed {
                reason: "I/O error on x.elm: denied".to_string(),
                path: Some("x.elm".into()),
            },
        },
    ];
    RunReport::new(
        "/tree",
        false,
        3,
        rules,
        RunState::Failed {
            index: 1,
            reason: "I/O error on x.elm: denied".to_string(),
        },
    )
}

#[test]
fn test_human_readable_lists_rules_and_result() {
    let text = Reporter::to_human_readable(&failed_report());

    assert!(text.contains("=== Migration Report ==="));
    assert!(text.contains("OK     'Ui' -> 'Dom'  (5 replacements in 2 of 3 files)"));
    assert!(text.contains("FAILED 'a' -> 'b'"));
    assert!(text.contains("1 applied, 1 skipped, 3 total"));
    assert!(text.contains("Result: FAILED at rule 2"));
}

#[test]
fn test_json_round_trips_summary() {
    let json = Reporter::to_json(&failed_report());
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["summary"]["passed"], false);
    assert_eq!(value["state"]["state"], "failed");
    assert_eq!(value["state"]["index"], 1);
    assert_eq!(value["rules"][1]["outcome"]["status"], "failed");
}

#[test]
fn test_rule_table_is_numbered_in_order() {
    let table = Reporter::rule_table(&preset("elm-dom").unwrap());
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines[0], "Extensions: elm, md");
    assert_eq!(lines[1], "  1. 'Ui.Element' -> 'Dom.Element'");
    assert_eq!(lines[14], " 14. 'import Ui' -> 'import Dom'");
}
