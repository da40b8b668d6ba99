//! Report output on stdout.

use super::OutputFormat;
use crate::catalog::{self, Report};
use std::io::{self, Write};

/// Writes finished reports to stdout in the configured format.
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    format: OutputFormat,
}

impl OutputManager {
    /// Create a new output manager
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print the full report
    pub fn report(&self, report: &Report) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_report(report, &mut out)
    }

    /// Write the full report to `out`
    pub fn write_report<W: Write>(&self, report: &Report, out: &mut W) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => catalog::render_text(report, out),
            OutputFormat::Json => catalog::render_json(report, out),
        }
    }
}
