//! recode - Entry Point
//!
//! ```text
//! recode [ROOT] [--config PATH] [--preset NAME] [--dry-run] [--sequential]
//!        [--format human|report|json] [--list-rules] [--print-config]
//! ```
//!
//! Exit codes: 0 when every rule was applied, 1 when a rule failed,
//! 2 on configuration errors (nothing touched).

use clap::Parser;
use recode::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    recode::run(&cli)
}
