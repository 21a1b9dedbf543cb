//! Built-in migration rule tables
//!
//! | Preset | Extensions | Purpose |
//! |--------|------------|---------|
//! | `elm-dom` | `elm`, `md` | Port a code base from Modular Ui to elm-dom |

use crate::error::{Error, Result};
use crate::value_objects::{Rule, RuleSet};

/// Names of every built-in preset
pub const PRESET_NAMES: &[&str] = &["elm-dom"];

const ELM_DOM_EXTENSIONS: &[&str] = &["elm", "md"];

// `import Ui` stays last: earlier it would turn `import Ui.Modifier` into
// `import Dom.Modifier` before the rules that drop those imports can match.
const ELM_DOM_RULES: &[(&str, &str)] = &[
    ("Ui.Element", "Dom.Element"),
    ("import Dom.Element", ""),
    ("Dom.Element.addAttribute", "Dom.addAttribute"),
    ("Ui.Modifier.add", "Dom.addClass"),
    ("Ui.Modifier.conditional", "Dom.addClassConditional"),
    ("import Ui.Modifier", ""),
    ("Ui.Attribute.add", "Dom.addAttribute"),
    ("import Ui.Attribute", ""),
    ("import Dom.Property", ""),
    ("import Dom.Attribute", ""),
    ("Modular Ui", "elm-dom"),
    ("Ui.DragDrop", "Dom.DragDrop"),
    ("Ui.Action", "Dom.addAction"),
    ("import Ui", "import Dom"),
];

/// Look up a built-in rule set by name
pub fn preset(name: &str) -> Result<RuleSet> {
    match name {
        "elm-dom" => from_table(ELM_DOM_RULES, ELM_DOM_EXTENSIONS),
        _ => Err(Error::UnknownPreset {
            name: name.to_string(),
        }),
    }
}

fn from_table(rules: &[(&str, &str)], extensions: &[&str]) -> Result<RuleSet> {
    let rules = rules.iter().copied().map(Rule::from).collect();
    RuleSet::new(rules, extensions.iter().copied())
}
