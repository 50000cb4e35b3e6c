//! Plain-text formatting for validation reports.
//!
//! Stream selection (stdout vs stderr) and the process exit status are the
//! CLI's concern; this module only writes.

use std::io::Write;

use crate::report::ValidationReport;

/// Write a human-readable report: one diagnostic line per failure, the
/// aggregated failing-path list, and the final verdict line. Every failing
/// path is listed, not just a count.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    for failure in &report.failures {
        writeln!(writer, "\u{2717} {}", failure.format_human_readable())?;
    }

    if report.ok {
        writeln!(
            writer,
            "\u{2713} All {} files passed the check.",
            report.scanned_files
        )?;
    } else {
        writeln!(writer, "Files that failed the check:")?;
        for failure in &report.failures {
            writeln!(writer, "- {}", failure.file.display())?;
        }
    }

    Ok(())
}
