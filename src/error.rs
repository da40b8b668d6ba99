//! Error types for bundle inspection and reporting.
//!
//! Per-bundle failures ([`InspectError`]) are local and never abort a scan.
//! Only [`ScanError::RootUnreadable`] stops a run, and even then the CLI
//! reports it and exits cleanly.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for reporting operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Main error type for the command line surface
#[derive(Error, Debug)]
pub enum ReportError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

/// Errors that end a scan before any report is produced.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The root directory could not be enumerated.
    #[error("RootUnreadable: cannot enumerate {}: {}", path.display(), source)]
    RootUnreadable {
        /// Root directory that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Per-bundle inspection failures.
///
/// Each one excludes its bundle from the report and is surfaced as a single
/// diagnostic line. None of them stop the enumeration.
#[derive(Error, Debug)]
pub enum InspectError {
    /// Manifest exists but could not be opened or read
    #[error("error opening Info.plist file {}: {}", path.display(), source)]
    ManifestUnreadable {
        /// Manifest path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Manifest was read but declares no executable
    #[error("CFBundleExecutable not found in {}", path.display())]
    ExecutableNameMissing {
        /// Manifest path
        path: PathBuf,
    },

    /// Named executable could not be opened or read
    #[error("error opening executable file {}: {}", path.display(), source)]
    ExecutableUnreadable {
        /// Executable path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Executable header matches none of the known signatures
    #[error("unknown binary format in {}", path.display())]
    UnrecognizedFormat {
        /// Executable path
        path: PathBuf,
    },
}

/// Failure kind of an [`InspectError`], as printed in diagnostics.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DiagnosticKind {
    ManifestUnreadable,
    ExecutableNameMissing,
    ExecutableUnreadable,
    UnrecognizedFormat,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ManifestUnreadable => "ManifestUnreadable",
            Self::ExecutableNameMissing => "ExecutableNameMissing",
            Self::ExecutableUnreadable => "ExecutableUnreadable",
            Self::UnrecognizedFormat => "UnrecognizedFormat",
        };
        f.write_str(name)
    }
}

impl InspectError {
    /// Failure kind of this error
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Self::ManifestUnreadable { .. } => DiagnosticKind::ManifestUnreadable,
            Self::ExecutableNameMissing { .. } => DiagnosticKind::ExecutableNameMissing,
            Self::ExecutableUnreadable { .. } => DiagnosticKind::ExecutableUnreadable,
            Self::UnrecognizedFormat { .. } => DiagnosticKind::UnrecognizedFormat,
        }
    }

    /// Path named by the diagnostic (manifest or executable)
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::ManifestUnreadable { path, .. }
            | Self::ExecutableNameMissing { path }
            | Self::ExecutableUnreadable { path, .. }
            | Self::UnrecognizedFormat { path } => path,
        }
    }

    /// Unrecognized headers are warnings; everything else is an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::UnrecognizedFormat { .. })
    }
}
