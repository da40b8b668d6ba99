//! Command line interface for the bundle architecture inventory.
//!
//! This module wires argument parsing, logging setup, the directory scan and
//! report output together.

mod args;
mod output;

pub use args::{Args, OutputFormat, RuntimeConfig};
pub use output::OutputManager;

use crate::error::{CliError, Result, ScanError};
use crate::inspector;
use anyhow::Context;

/// Main CLI entry point
///
/// Returns the process exit code. A root directory that cannot be enumerated
/// is logged and still exits with 0; no report is printed for it.
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    init_logging(args.log_filter());

    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let config = RuntimeConfig::from(&args);
    execute(&config)
}

/// Runs one scan and prints its report.
pub fn execute(config: &RuntimeConfig) -> Result<i32> {
    let outcome = match inspector::scan(config.settings()) {
        Ok(outcome) => outcome,
        Err(e @ ScanError::RootUnreadable { .. }) => {
            log::error!("{}", e);
            return Ok(0);
        }
    };

    config
        .output()
        .report(&outcome.report)
        .context("failed to write report to stdout")?;

    Ok(0)
}

/// Installs the global logger writing to stderr.
///
/// `RUST_LOG` overrides `default_filter`.
fn init_logging(default_filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
