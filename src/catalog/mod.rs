//! Aggregation of inspected bundles into the architecture report.
//!
//! A [`Catalog`] is filled during the directory pass and consumed by
//! [`Catalog::finalize`], which sorts every section and hands back an
//! immutable [`Report`].

mod render;

pub use render::{render_json, render_text};

use crate::inspector::{Architecture, BundleRecord};

/// Report sections, in print order.
pub const SECTION_ORDER: [Architecture; 3] = [
    Architecture::Intel64,
    Architecture::AppleSilicon64,
    Architecture::Universal,
];

/// Append-only buckets of classified records.
#[derive(Debug, Default)]
pub struct Catalog {
    intel: Vec<BundleRecord>,
    apple_silicon: Vec<BundleRecord>,
    universal: Vec<BundleRecord>,
    unclassified: usize,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Files a record under its architecture.
    ///
    /// `Unknown` records are counted but never reported.
    pub fn add(&mut self, record: BundleRecord) {
        match record.architecture() {
            Architecture::Intel64 => self.intel.push(record),
            Architecture::AppleSilicon64 => self.apple_silicon.push(record),
            Architecture::Universal => self.universal.push(record),
            Architecture::Unknown => self.unclassified += 1,
        }
    }

    /// Sorts every section and freezes the catalog into a report.
    pub fn finalize(mut self) -> Report {
        for section in [&mut self.intel, &mut self.apple_silicon, &mut self.universal] {
            sort_section(section);
        }

        Report {
            intel: self.intel,
            apple_silicon: self.apple_silicon,
            universal: self.universal,
            unclassified: self.unclassified,
        }
    }
}

/// Orders by executable name (byte-wise), ties broken by manifest path.
fn sort_section(records: &mut [BundleRecord]) {
    records.sort_by(|a, b| {
        a.executable_name()
            .cmp(b.executable_name())
            .then_with(|| a.manifest_path().cmp(b.manifest_path()))
    });
}

/// Sorted, immutable result of a scan.
#[derive(Debug, Default, serde::Serialize)]
pub struct Report {
    intel: Vec<BundleRecord>,
    apple_silicon: Vec<BundleRecord>,
    universal: Vec<BundleRecord>,
    unclassified: usize,
}

impl Report {
    /// Records listed under `arch`. Always empty for `Unknown`.
    pub fn records(&self, arch: Architecture) -> &[BundleRecord] {
        match arch {
            Architecture::Intel64 => &self.intel,
            Architecture::AppleSilicon64 => &self.apple_silicon,
            Architecture::Universal => &self.universal,
            Architecture::Unknown => &[],
        }
    }

    /// Sections in print order: Intel, Apple Silicon, Universal.
    pub fn sections(&self) -> impl Iterator<Item = (Architecture, &[BundleRecord])> {
        SECTION_ORDER
            .into_iter()
            .map(move |arch| (arch, self.records(arch)))
    }

    /// Number of reported records
    pub fn classified_count(&self) -> usize {
        self.intel.len() + self.apple_silicon.len() + self.universal.len()
    }

    /// Number of candidate bundles left out of the report
    pub fn unclassified(&self) -> usize {
        self.unclassified
    }
}
