//! Command line interface

use crate::config::RecodeConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command line interface for recode
#[derive(Parser, Debug)]
#[command(name = "recode")]
#[command(about = "Apply ordered literal find/replace rules across a source tree")]
#[command(version)]
pub struct Cli {
    /// Root of the tree to migrate
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Path to configuration file (default: <ROOT>/recode.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Built-in rule table to apply (overrides rules from configuration)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Count what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Process the files of each rule one at a time
    #[arg(long)]
    pub sequential: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Print the resolved rule table and exit
    #[arg(long)]
    pub list_rules: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

/// How a run is shown on stdout
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One progress line per rule
    #[default]
    Human,
    /// Progress lines followed by the full report
    Report,
    /// Only the JSON report
    Json,
}

impl Cli {
    /// Apply command line overrides on top of loaded configuration
    pub fn apply_to(&self, config: &mut RecodeConfig) {
        if let Some(preset) = &self.preset {
            config.preset = Some(preset.clone());
            config.rules.clear();
        }
        if self.dry_run {
            config.dry_run = true;
        }
        if self.sequential {
            config.parallel = false;
        }
    }
}
