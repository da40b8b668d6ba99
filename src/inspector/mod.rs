//! Bundle discovery and executable architecture classification.
//!
//! # Overview
//!
//! For every immediate subdirectory of the scan root the inspector:
//! 1. Looks for `Contents/Info.plist` (no manifest: not a candidate)
//! 2. Extracts `CFBundleExecutable` from the manifest
//! 3. Reads the first 4 bytes of `Contents/MacOS/<name>`
//! 4. Maps the magic number to an [`Architecture`]
//!
//! # Module Organization
//!
//! - [`arch`] - Magic number table and header classification
//! - [`bundle`] - [`BundleRecord`] and [`BundleInspector`]
//! - [`scanner`] - Directory enumeration feeding the catalog
//! - [`settings`] - [`ScanSettings`] and its builder

pub mod arch;
pub mod bundle;
pub mod scanner;
pub mod settings;

pub use arch::{Architecture, ByteOrder, classify_bytes, classify_file, classify_reader};
pub use bundle::{BundleInspector, BundleRecord, Inspection};
pub use scanner::{ScanOutcome, scan};
pub use settings::{ScanSettings, ScanSettingsBuilder};
