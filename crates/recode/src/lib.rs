//! # recode
//!
//! One-shot source tree migrations: an ordered list of literal find/replace
//! rules is applied to every file with a configured extension, one rule at a
//! time across the whole tree, stopping at the first rule that fails.
//!
//! This crate holds the command line front end. The rules and reports live
//! in `recode-domain`, the rewriting in `recode-engine`.

pub mod cli;
pub mod config;
pub mod console;
pub mod constants;
pub mod logging;

pub use cli::{Cli, OutputFormat};
pub use config::{ConfigLoader, LoggingConfig, RecodeConfig, RuleConfig};
pub use console::ConsoleObserver;

use anyhow::Context;
use recode_domain::constants::{EXIT_CONFIGURATION, EXIT_SUCCESS};
use recode_domain::{NoopObserver, RuleOutcome};
use recode_engine::{Reporter, Rewriter, Runner};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

/// Run the command line and map the outcome to an exit code
pub fn run(cli: &Cli) -> ExitCode {
    match execute(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_CONFIGURATION)
        }
    }
}

fn execute(cli: &Cli) -> anyhow::Result<u8> {
    let mut loader = ConfigLoader::new().with_root(&cli.root);
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }

    let mut config = loader.load().context("Failed to load configuration")?;
    cli.apply_to(&mut config);
    logging::init_logging(&config.logging)?;
    if let Some(path) = loader.config_file() {
        info!("Configuration loaded from {}", path.display());
    }

    let mut stdout = std::io::stdout().lock();
    if cli.print_config {
        write!(stdout, "{}", ConfigLoader::to_toml(&config)?)?;
        return Ok(EXIT_SUCCESS);
    }
    migrate(&cli.root, &config, cli.format, cli.list_rules, &mut stdout)
}

/// Resolve the rule set and apply it under `root`, writing progress to `out`.
///
/// Returns the exit code of the run. Errors are configuration problems found
/// before any file was touched.
pub fn migrate<W: Write>(
    root: &Path,
    config: &RecodeConfig,
    format: OutputFormat,
    list_rules: bool,
    out: &mut W,
) -> anyhow::Result<u8> {
    let rule_set = config.resolve_rule_set()?;
    if list_rules {
        write!(out, "{}", Reporter::rule_table(&rule_set))?;
        return Ok(EXIT_SUCCESS);
    }

    let rewriter = Rewriter::new(root)
        .with_exclude_patterns(config.exclude.iter().cloned())
        .with_dry_run(config.dry_run)
        .with_parallel(config.parallel);
    let runner = Runner::new(rewriter);

    let report = if format == OutputFormat::Json {
        let report = runner.run(&rule_set, &mut NoopObserver)?;
        writeln!(out, "{}", Reporter::to_json(&report))?;
        report
    } else {
        let report = {
            let mut observer = ConsoleObserver::new(&mut *out);
            runner.run(&rule_set, &mut observer)?
        };
        if format == OutputFormat::Report {
            write!(out, "\n{}", Reporter::to_human_readable(&report))?;
        }
        report
    };

    if let Some(failed) = report.failure() {
        if let RuleOutcome::Failed { reason, .. } = &failed.outcome {
            eprintln!(
                "error: rule #{} {} failed: {}",
                failed.index + 1,
                failed.rule,
                reason
            );
        }
    }

    Ok(report.exit_code())
}
