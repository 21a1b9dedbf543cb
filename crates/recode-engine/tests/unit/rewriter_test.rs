//! Tests for single-rule rewrites

use crate::test_utils::{read_file, write_bytes, write_file};
use recode_domain::{Error, Rule};
use recode_engine::Rewriter;
use std::collections::BTreeSet;
use tempfile::TempDir;

fn elm() -> BTreeSet<String> {
    ["elm".to_string()].into_iter().collect()
}

#[test]
fn test_rewrites_every_matching_file() {
    let temp = TempDir::new().unwrap();
    write_file(&temp, "A.elm", "import Ui.Element\nUi.Element.view");
    write_file(&temp, "nested/B.elm", "Ui.Element");
    write_file(&temp, "C.elm", "nothing here");

    let stats = Rewriter::new(temp.path())
        .apply(&Rule::new("Ui.Element", "Dom.Element"), &elm())
        .unwrap();

    assert_eq!(read_file(&temp, "A.elm"), "import Dom.Element\nDom.Element.view");
    assert_eq!(read_file(&temp, "nested/B.elm"), "Dom.Element");
    assert_eq!(read_file(&temp, "C.elm"), "nothing here");
    assert_eq!(stats.files_scanned, 3);
    assert_eq!(stats.files_changed, 2);
    assert_eq!(stats.replacements, 3);
}

#[test]
fn test_other_extensions_are_never_touched() {
    let temp = TempDir::new().unwrap();
    write_file(&temp, "A.elm", "Ui");
    write_file(&temp, "index.js", "Ui");
    write_file(&temp, "README.md", "Ui");

    Rewriter::new(temp.path())
        .apply(&Rule::new("Ui", "Dom"), &elm())
        .unwrap();

    assert_eq!(read_file(&temp, "A.elm"), "Dom");
    assert_eq!(read_file(&temp, "index.js"), "Ui");
    assert_eq!(read_file(&temp, "README.md"), "Ui");
}

#[test]
fn test_dot_in_pattern_is_literal() {
    let temp = TempDir::new().unwrap();
    write_file(&temp, "A.elm", "UixElement Ui.Element");

    let stats = Rewriter::new(temp.path())
        .apply(&Rule::new("Ui.Element", "X"), &elm())
        .unwrap();

    assert_eq!(read_file(&temp, "A.elm"), "UixElement X");
    assert_eq!(stats.replacements, 1);
}

#[test]
fn test_no_match_is_success_and_leaves_file_alone() {
    let temp = TempDir::new().unwrap();
    write_file(&temp, "A.elm", "module A exposing (..)");
    let before = std::fs::metadata(temp.path().join("A.elm"))
        .unwrap()
        .modified()
        .unwrap();

    let stats = Rewriter::new(temp.path())
        .apply(&Rule::new("Ui.Action", "Dom.addAction"), &elm())
        .unwrap();

    let after = std::fs::metadata(temp.path().join("A.elm"))
        .unwrap()
        .modified()
        .unwrap();
    assert!(stats.is_unmatched());
    assert_eq!(stats.files_scanned, 1);
    assert_eq!(before, after);
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    write_file(&temp, "A.elm", "Ui Ui");

    let stats = Rewriter::new(temp.path())
        .with_dry_run(true)
        .apply(&Rule::new("Ui", "Dom"), &elm())
        .unwrap();

    assert_eq!(stats.replacements, 2);
    assert_eq!(stats.files_changed, 1);
    assert_eq!(read_file(&temp, "A.elm"), "Ui Ui");
}

#[test]
fn test_dry_run_later_rules_see_staged_text() {
    let temp = TempDir::new().unwrap();
    write_file(&temp, "A.elm", "Ui.Element.addAttribute");

    let rewriter = Rewriter::new(temp.path()).with_dry_run(true);
    let first = rewriter
        .apply(&Rule::new("Ui.Element.addAttribute", "Ui.Attribute.add"), &elm())
        .unwrap();
    let second = rewriter
        .apply(&Rule::new("Ui.Attribute.add", "Dom.addAttribute"), &elm())
        .unwrap();

    assert_eq!(first.replacements, 1);
    assert_eq!(second.replacements, 1);
    assert_eq!(
        rewriter.staged_text(&temp.path().join("A.elm")).as_deref(),
        Some("Dom.addAttribute")
    );
    assert_eq!(read_file(&temp, "A.elm"), "Ui.Element.addAttribute");

    rewriter.discard_staged();
    assert_eq!(rewriter.staged_text(&temp.path().join("A.elm")), None);
}

#[test]
fn test_sequential_and_parallel_agree() {
    let make_tree = || {
        let temp = TempDir::new().unwrap();
        for i in 0..20 {
            write_file(&temp, &format!("m{i}/F{i}.elm"), "Ui.a Ui.b");
        }
        temp
    };
    let rule = Rule::new("Ui", "Dom");

    let seq = make_tree();
    let par = make_tree();
    let seq_stats = Rewriter::new(seq.path())
        .with_parallel(false)
        .apply(&rule, &elm())
        .unwrap();
    let par_stats = Rewriter::new(par.path())
        .with_parallel(true)
        .apply(&rule, &elm())
        .unwrap();

    assert_eq!(seq_stats, par_stats);
    assert_eq!(par_stats.replacements, 40);
    assert_eq!(read_file(&par, "m7/F7.elm"), "Dom.a Dom.b");
}

#[test]
fn test_unreadable_file_fails_with_its_path() {
    let temp = TempDir::new().unwrap();
    write_file(&temp, "A.elm", "Ui");
    write_bytes(&temp, "B.elm", &[0xff, 0xfe, 0x00, b'U', b'i']);

    for parallel in [false, true] {
        let err = Rewriter::new(temp.path())
            .with_parallel(parallel)
            .apply(&Rule::new("Ui", "Dom"), &elm())
            .unwrap_err();

        match err {
            Error::Io { path, source } => {
                assert_eq!(path, temp.path().join("B.elm"));
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}

#[test]
fn test_excluded_paths_are_not_rewritten() {
    let temp = TempDir::new().unwrap();
    write_file(&temp, "src/A.elm", "Ui");
    write_file(&temp, "elm-stuff/B.elm", "Ui");

    Rewriter::new(temp.path())
        .apply(&Rule::new("Ui", "Dom"), &elm())
        .unwrap();
    assert_eq!(read_file(&temp, "elm-stuff/B.elm"), "Ui");

    Rewriter::new(temp.path())
        .with_exclude_patterns(Vec::<String>::new())
        .apply(&Rule::new("Ui", "Dom"), &elm())
        .unwrap();
    assert_eq!(read_file(&temp, "elm-stuff/B.elm"), "Dom");
    assert_eq!(read_file(&temp, "src/A.elm"), "Dom");
}
