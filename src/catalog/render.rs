//! Console rendering of a [`Report`].

use super::Report;
use std::io::{self, Write};

/// Writes titled sections, one executable name per line.
///
/// Every section prints its title, even when empty.
pub fn render_text<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    for (arch, records) in report.sections() {
        let Some(title) = arch.section_title() else {
            continue;
        };
        writeln!(out)?;
        writeln!(out, "{}:", title)?;
        for record in records {
            writeln!(out, "{}", record.executable_name())?;
        }
    }
    out.flush()
}

/// Writes the report as a pretty-printed JSON document.
pub fn render_json<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    out.flush()
}
