//! Applies one rule across a tree.
//!
//! Every file whose extension is in the set is read, every literal
//! occurrence of the pattern is replaced, and the file is written back to the
//! same path. Files without an occurrence are left untouched on disk.
//!
//! In a dry run nothing is written. The text each rule would have produced is
//! staged in memory instead, so the next rule sees the same content it would
//! see in a real run.

use crate::scan;
use dashmap::DashMap;
use rayon::prelude::*;
use recode_domain::constants::DEFAULT_EXCLUDES;
use recode_domain::{Error, Result, RewriteStats, Rule};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Rewrites files in place under a fixed root
#[derive(Debug, Clone)]
pub struct Rewriter {
    root: PathBuf,
    exclude: Vec<String>,
    dry_run: bool,
    parallel: bool,
    staged: DashMap<PathBuf, String>,
}

impl Rewriter {
    /// Rewriter for `root` with the default excludes, writing in parallel
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude: DEFAULT_EXCLUDES.iter().map(ToString::to_string).collect(),
            dry_run: false,
            parallel: true,
            staged: DashMap::new(),
        }
    }

    /// Replace the exclude patterns
    pub fn with_exclude_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Count matches without writing anything
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Process files of one rule on the rayon pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Root of the tree being rewritten
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether files are left untouched
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Content a dry run has staged for `path`, if any rule changed it
    pub fn staged_text(&self, path: &Path) -> Option<String> {
        self.staged.get(path).map(|entry| entry.value().clone())
    }

    /// Forget every staged dry-run change
    pub fn discard_staged(&self) {
        self.staged.clear();
    }

    /// Apply `rule` to every matching file under the root.
    ///
    /// Returns only after every file has been handled. On failure the error
    /// names the first failing file in path order; files rewritten before it
    /// stay rewritten.
    pub fn apply(&self, rule: &Rule, extensions: &BTreeSet<String>) -> Result<RewriteStats> {
        let files = scan::collect_files(&self.root, extensions, &self.exclude)?;
        debug!(
            files = files.len(),
            parallel = self.parallel,
            "Applying {} across {}",
            rule,
            self.root.display()
        );

        let mut stats = RewriteStats::default();
        if self.parallel {
            let counts: Vec<Result<usize>> = files
                .par_iter()
                .map(|path| self.rewrite_file(rule, path))
                .collect();
            for count in counts {
                stats.record(count?);
            }
        } else {
            for path in &files {
                stats.record(self.rewrite_file(rule, path)?);
            }
        }

        Ok(stats)
    }

    /// Rewrite a single file, returning the number of replacements
    pub fn rewrite_file(&self, rule: &Rule, path: &Path) -> Result<usize> {
        let content = match self.staged_text(path) {
            Some(text) => text,
            None => fs::read_to_string(path).map_err(|e| Error::io(path, e))?,
        };

        let Some((updated, count)) = rule.apply(&content) else {
            trace!(path = %path.display(), "No match");
            return Ok(0);
        };

        if self.dry_run {
            self.staged.insert(path.to_path_buf(), updated);
        } else {
            fs::write(path, updated).map_err(|e| Error::io(path, e))?;
        }
        debug!(
            path = %path.display(),
            replacements = count,
            dry_run = self.dry_run,
            "Rewrote file"
        );

        Ok(count)
    }
}
