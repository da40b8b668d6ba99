//! Command line argument parsing and validation.

use crate::inspector::settings::DEFAULT_ROOT;
use crate::inspector::{ScanSettings, ScanSettingsBuilder};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Report output format
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Titled sections, one executable name per line
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Inventory of installed application bundles by executable architecture
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundle_arch",
    version,
    about = "Lists installed application bundles by executable architecture",
    long_about = "Inspects every application bundle directly under ROOT and reports whether its main
executable is an Intel, Apple Silicon or Universal binary.

The executable is taken from CFBundleExecutable in Contents/Info.plist and classified
from the Mach-O magic number in the first 4 bytes of Contents/MacOS/<name>.

Usage:
  kodegen_bundle_arch
  kodegen_bundle_arch ~/Applications
  kodegen_bundle_arch /Volumes/Backup/Applications --format json

Bundles that cannot be classified are left out of the report; one diagnostic line per
bundle is written to stderr. Set RUST_LOG to change the log filter."
)]
pub struct Args {
    /// Directory whose immediate subdirectories are inspected
    #[arg(value_name = "ROOT", env = "KODEGEN_APPS_DIR", default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log inspection progress at debug level
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors (hides unrecognized-format warnings)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.root.as_os_str().is_empty() {
            return Err("Root directory cannot be empty".to_string());
        }

        Ok(())
    }

    /// Default log filter implied by the verbosity flags.
    ///
    /// `RUST_LOG` still takes precedence.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    settings: ScanSettings,
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let settings = ScanSettingsBuilder::new().root(&args.root).build();
        let output = super::OutputManager::new(args.format);

        Self { settings, output }
    }
}

impl RuntimeConfig {
    /// Scan settings for this run
    pub fn settings(&self) -> &ScanSettings {
        &self.settings
    }

    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }
}
