//! Rewrite engine for recode
//!
//! Applies a [`RuleSet`](recode_domain::RuleSet) to a directory tree:
//!
//! - [`scan`] finds the files whose extension is in the rule set
//! - [`Rewriter`] applies one rule to every such file, in place
//! - [`Runner`] applies the rules one after another and stops at the first
//!   failing rule
//! - [`Reporter`] renders the resulting [`RunReport`](recode_domain::RunReport)
//!
//! ```ignore
//! use recode_domain::{NoopObserver, preset};
//! use recode_engine::{Rewriter, Runner};
//!
//! let rules = preset("elm-dom")?;
//! let runner = Runner::new(Rewriter::new("./my-elm-app"));
//! let report = runner.run(&rules, &mut NoopObserver)?;
//! assert!(report.passed());
//! ```

pub mod reporter;
pub mod rewriter;
pub mod runner;
pub mod scan;

pub use reporter::Reporter;
pub use rewriter::Rewriter;
pub use runner::Runner;
