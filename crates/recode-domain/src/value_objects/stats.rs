//! Per-rule rewrite statistics

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// What applying one rule did across a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteStats {
    /// Files whose extension matched and were read
    pub files_scanned: usize,
    /// Files that contained the pattern (and were rewritten unless dry-run)
    pub files_changed: usize,
    /// Total occurrences replaced
    pub replacements: usize,
}

impl RewriteStats {
    /// Account for one scanned file with `replacements` occurrences
    pub fn record(&mut self, replacements: usize) {
        self.files_scanned += 1;
        if replacements > 0 {
            self.files_changed += 1;
            self.replacements += replacements;
        }
    }

    /// True if the rule matched nothing anywhere
    pub fn is_unmatched(&self) -> bool {
        self.replacements == 0
    }
}

impl AddAssign for RewriteStats {
    fn add_assign(&mut self, rhs: Self) {
        self.files_scanned += rhs.files_scanned;
        self.files_changed += rhs.files_changed;
        self.replacements += rhs.replacements;
    }
}
