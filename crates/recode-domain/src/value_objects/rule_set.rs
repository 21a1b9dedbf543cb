//! Ordered rule collections

use crate::error::{Error, Result};
use crate::value_objects::Rule;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An ordered list of rules and the extensions they apply to.
///
/// Order is exactly the definition order and is never changed. Each rule runs
/// over the whole tree before the next one starts, so a later rule sees the
/// output of every earlier rule. Keeping prefix-like rules after the rules
/// they would shadow is up to whoever writes the table.
///
/// # Example
///
/// ```
/// use recode_domain::{Rule, RuleSet};
///
/// let set = RuleSet::new(
///     vec![Rule::new("Ui.Element", "Dom.Element"), Rule::new("import Ui", "import Dom")],
///     ["elm", ".md"],
/// )
/// .unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert!(set.extensions().contains("md"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RuleSetData")]
pub struct RuleSet {
    rules: Vec<Rule>,
    extensions: BTreeSet<String>,
}

/// Unvalidated wire form; deserialization goes through [`RuleSet::new`]
#[derive(Deserialize)]
struct RuleSetData {
    rules: Vec<Rule>,
    extensions: Vec<String>,
}

impl TryFrom<RuleSetData> for RuleSet {
    type Error = Error;

    fn try_from(data: RuleSetData) -> Result<Self> {
        Self::new(data.rules, data.extensions)
    }
}

impl RuleSet {
    /// Build a rule set, rejecting empty patterns and an empty extension set.
    ///
    /// Extensions may be given with or without a leading dot.
    pub fn new<I, S>(rules: Vec<Rule>, extensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Some(index) = rules.iter().position(|rule| !rule.is_valid()) {
            return Err(Error::EmptyPattern { index });
        }

        let extensions = normalize_extensions(extensions);
        if extensions.is_empty() {
            return Err(Error::NoExtensions);
        }

        Ok(Self { rules, extensions })
    }

    /// Same rules, different extension filter
    pub fn with_extensions<I, S>(self, extensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(self.rules, extensions)
    }

    /// Rules in definition order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Extensions (without leading dot) a file must have to be rewritten
    pub fn extensions(&self) -> &BTreeSet<String> {
        &self.extensions
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if there are no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate rules in order
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

fn normalize_extensions<I, S>(extensions: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extensions
        .into_iter()
        .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}
