//! Literal find/replace rules

use serde::{Deserialize, Serialize};
use std::fmt;

/// One literal substitution.
///
/// `find` is matched as exact text: characters such as `.` or `*` carry no
/// special meaning. An empty `replace` deletes every occurrence.
///
/// # Example
///
/// ```
/// use recode_domain::Rule;
///
/// let rule = Rule::new("Ui.Element", "Dom.Element");
/// let (text, count) = rule.apply("import Ui.Element exposing (..)").unwrap();
///
/// assert_eq!(text, "import Dom.Element exposing (..)");
/// assert_eq!(count, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    find: String,
    replace: String,
}

impl Rule {
    /// Create a rule. Empty patterns are rejected when the rule joins a
    /// [`RuleSet`](crate::RuleSet).
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
        }
    }

    /// Text to search for
    pub fn find(&self) -> &str {
        &self.find
    }

    /// Text written in place of every match
    pub fn replace(&self) -> &str {
        &self.replace
    }

    /// True if this rule has a non-empty pattern
    pub fn is_valid(&self) -> bool {
        !self.find.is_empty()
    }

    /// True if this rule only removes text
    pub fn is_deletion(&self) -> bool {
        self.replace.is_empty()
    }

    /// Number of non-overlapping occurrences of the pattern in `text`
    pub fn count_in(&self, text: &str) -> usize {
        if self.find.is_empty() {
            return 0;
        }
        text.matches(self.find.as_str()).count()
    }

    /// Replace every non-overlapping occurrence, scanning left to right.
    ///
    /// Returns `None` when the pattern does not occur, so callers can skip
    /// writing untouched files.
    pub fn apply(&self, text: &str) -> Option<(String, usize)> {
        let count = self.count_in(text);
        if count == 0 {
            return None;
        }
        Some((text.replace(self.find.as_str(), &self.replace), count))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' -> '{}'", self.find, self.replace)
    }
}

impl<F: Into<String>, R: Into<String>> From<(F, R)> for Rule {
    fn from((find, replace): (F, R)) -> Self {
        Self::new(find, replace)
    }
}
