//! Single-pass enumeration of candidate bundles under a root directory.

use super::bundle::BundleInspector;
use super::settings::ScanSettings;
use crate::catalog::{Catalog, Report};
use crate::error::{InspectError, ScanError};
use std::io;
use walkdir::WalkDir;

/// Everything a finished scan produced.
#[derive(Debug)]
pub struct ScanOutcome {
    /// Sorted report of classified bundles
    pub report: Report,
    /// Per-bundle diagnostics in enumeration order
    pub diagnostics: Vec<InspectError>,
}

/// Inspects every immediate subdirectory of the configured root.
///
/// Each diagnostic is logged as soon as its bundle is inspected: unrecognized
/// headers at `warn`, every other failure at `error`. Only a root that cannot
/// be enumerated fails the scan, and no partial report is produced for it.
pub fn scan(settings: &ScanSettings) -> Result<ScanOutcome, ScanError> {
    let root = settings.root();
    log::info!("Scanning {}", root.display());

    if let Ok(metadata) = std::fs::metadata(root) {
        if !metadata.is_dir() {
            return Err(ScanError::RootUnreadable {
                path: root.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
            });
        }
    }

    let inspector = BundleInspector::new(settings);
    let mut catalog = Catalog::new();
    let mut diagnostics = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(settings.follow_links());

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(ScanError::RootUnreadable {
                    path: root.to_path_buf(),
                    source: e.into(),
                });
            }
            Err(e) => {
                log::debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let Some(inspection) = inspector.inspect(entry.path()) else {
            continue;
        };

        if let Some(diagnostic) = inspection.diagnostic {
            report_diagnostic(&diagnostic);
            diagnostics.push(diagnostic);
        }
        catalog.add(inspection.record);
    }

    let report = catalog.finalize();
    log::info!(
        "Catalogued {} bundles ({} unclassified)",
        report.classified_count(),
        report.unclassified()
    );

    Ok(ScanOutcome {
        report,
        diagnostics,
    })
}

fn report_diagnostic(diagnostic: &InspectError) {
    if diagnostic.is_warning() {
        log::warn!("{}: {}", diagnostic.kind(), diagnostic);
    } else {
        log::error!("{}: {}", diagnostic.kind(), diagnostic);
    }
}
