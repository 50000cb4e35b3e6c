//! Validation report types.

use crate::error::ValidationFailure;

/// Result of a validation run over one directory tree.
///
/// CI gates on `ok`: false means at least one scanned file failed the header
/// check. I/O failures never appear here — they abort the run before any
/// report is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Number of candidate files scanned.
    pub scanned_files: usize,
    /// Whether every scanned file passed (vacuously true for zero files).
    pub ok: bool,
    /// Per-file failures, in traversal order. Never contains passing files.
    pub failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    /// Number of files that failed the check.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}
