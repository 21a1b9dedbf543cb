//! Console progress output
//!
//! ```text
//! Replacing 'Ui.Element' with 'Dom.Element'......done!
//! Replacing 'import Dom.Element' with ''......done!
//! ```

use recode_domain::{Error, RewriteStats, Rule, RunObserver};
use std::io::Write;

/// Prints one line per rule to a writer (stdout in the binary)
pub struct ConsoleObserver<W: Write> {
    out: W,
}

impl<W: Write> ConsoleObserver<W> {
    /// Observer writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

// Write errors are ignored; progress output never changes the run outcome.
impl<W: Write> RunObserver for ConsoleObserver<W> {
    fn rule_started(&mut self, _index: usize, rule: &Rule) {
        let _ = write!(
            self.out,
            "Replacing '{}' with '{}'...",
            rule.find(),
            rule.replace()
        );
        let _ = self.out.flush();
    }

    fn rule_completed(&mut self, _index: usize, _rule: &Rule, _stats: &RewriteStats) {
        let _ = writeln!(self.out, "...done!");
    }

    fn rule_failed(&mut self, _index: usize, _rule: &Rule, _error: &Error) {
        let _ = writeln!(self.out);
        let _ = self.out.flush();
    }
}
