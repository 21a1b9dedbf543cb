//! Tests for built-in presets

use recode_domain::{Error, PRESET_NAMES, preset};

#[test]
fn test_every_listed_preset_loads() {
    for name in PRESET_NAMES {
        let set = preset(name).unwrap();
        assert!(!set.is_empty(), "preset {name} has no rules");
    }
}

#[test]
fn test_elm_dom_order_and_extensions() {
    let set = preset("elm-dom").unwrap();

    assert_eq!(set.len(), 14);
    assert_eq!(set.rules()[0].find(), "Ui.Element");
    assert_eq!(set.rules()[1].replace(), "");

    let last = set.rules().last().unwrap();
    assert_eq!(last.find(), "import Ui");
    assert_eq!(last.replace(), "import Dom");

    let exts: Vec<&str> = set.extensions().iter().map(String::as_str).collect();
    assert_eq!(exts, vec!["elm", "md"]);
}

#[test]
fn test_unknown_preset() {
    match preset("nope") {
        Err(Error::UnknownPreset { name }) => assert_eq!(name, "nope"),
        other => panic!("Expected UnknownPreset, got {other:?}"),
    }
}
