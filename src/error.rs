//! Failure types for header validation.

use std::path::PathBuf;

/// The kind of header-comment failure recorded for a scanned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FailureKind {
    /// The first block comment's interior does not start with the marker.
    Malformed,
    /// The first block comment has fewer marker-prefixed lines than required.
    TooShort,
    /// No block comment exists anywhere in the file.
    NoComment,
}

/// A file that failed the header check.
///
/// These are recoverable per-file outcomes: the scan records them and keeps
/// going. I/O failures are never represented here — they abort the run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ValidationFailure {
    /// The file that failed.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: FailureKind,
    /// Human-readable description, phrased to follow the path.
    pub message: String,
}

impl ValidationFailure {
    /// Format the failure for human-readable output: `{file} {message}`.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{} {}", self.file.display(), self.message)
    }
}
