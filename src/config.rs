//! Scan configuration.
//!
//! The thresholds are fixed constants as far as the CLI is concerned; they
//! live on the config struct so library callers and tests can vary them.

use std::path::PathBuf;

/// Options for one header-validation scan.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ScanConfig {
    /// Root directory to scan. Must exist and be a directory.
    pub root: PathBuf,
    /// Target file extension without the leading dot (default: `ino`).
    /// Matched case-sensitively; files with any other extension are never read.
    pub extension: String,
    /// Minimum number of marker-prefixed lines a header comment needs
    /// (default: 4).
    pub min_marker_lines: usize,
    /// Continuation marker each documentation line must start with
    /// (default: `*`).
    pub marker: char,
}

impl ScanConfig {
    /// Build a config for `root` with the default thresholds.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: "ino".to_owned(),
            min_marker_lines: 4,
            marker: '*',
        }
    }
}
