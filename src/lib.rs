//! Inventory of installed application bundles by executable architecture
//!
//! This library inspects macOS `.app` bundles and classifies each main
//! executable as:
//! - Intel (thin 32-bit Mach-O header)
//! - Apple Silicon (thin 64-bit Mach-O header)
//! - Universal (fat binary)
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod inspector;
pub mod manifest;

// Re-export commonly used types
pub use error::{CliError, InspectError, ReportError, Result, ScanError};
