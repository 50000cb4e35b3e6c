//! # ino-doc-validator
//!
//! Leading block comment validator for Arduino example sketches.
//!
//! Recursively scans a directory for `.ino` files and checks that each one
//! opens with a `/* ... */` header comment whose documentation lines start
//! with `*` and number at least four. Meant as a CI gate over example trees.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ino_doc_validator::{ScanConfig, validate_tree};
//!
//! let config = ScanConfig::new("examples-tree");
//! let report = validate_tree(&config).unwrap();
//! println!("Files scanned: {}", report.scanned_files);
//! println!("Failures: {}", report.failure_count());
//! println!("OK: {}", report.ok);
//! ```

mod config;
mod error;
mod header;
pub mod output;
mod report;
mod strategy;

pub use config::ScanConfig;
pub use error::{FailureKind, ValidationFailure};
pub use header::{HeaderVerdict, check_header};
pub use report::ValidationReport;

use std::path::PathBuf;

use anyhow::Context;

use crate::strategy::fs::find_candidates;

/// Validate the header comments of all target files under a directory.
///
/// This is the primary public API. Each candidate file yields exactly one
/// verdict; failures are collected in traversal order and the scan keeps
/// going. Running twice over an unchanged tree yields an identical report.
///
/// # Errors
///
/// Returns an error if the root is not a directory, or if any traversal or
/// read operation fails. Filesystem errors are fatal: no partial report is
/// produced.
pub fn validate_tree(config: &ScanConfig) -> anyhow::Result<ValidationReport> {
    if !config.root.is_dir() {
        anyhow::bail!("Not a readable directory: {}", config.root.display());
    }

    let files = find_candidates(config)?;

    let mut failures = Vec::new();
    let mut scanned_files: usize = 0;
    for file in files {
        let content = std::fs::read_to_string(&file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        scanned_files += 1;

        let verdict = check_header(&content, config.marker, config.min_marker_lines);
        if let Some(failure) = failure_for(file, verdict, config.min_marker_lines) {
            failures.push(failure);
        }
    }

    let ok = failures.is_empty();
    Ok(ValidationReport {
        scanned_files,
        ok,
        failures,
    })
}

/// Map a non-passing verdict to the failure recorded for `file`.
fn failure_for(
    file: PathBuf,
    verdict: HeaderVerdict,
    min_marker_lines: usize,
) -> Option<ValidationFailure> {
    let (kind, message) = match verdict {
        HeaderVerdict::Pass => return None,
        HeaderVerdict::Malformed => (
            FailureKind::Malformed,
            "has a multiline comment whose lines don't start with an asterisk.".to_owned(),
        ),
        HeaderVerdict::TooShort { .. } => (
            FailureKind::TooShort,
            format!("has an insufficient multiline comment (less than {min_marker_lines} lines)."),
        ),
        HeaderVerdict::NoComment { has_code: true } => (
            FailureKind::NoComment,
            "has code but no valid multiline comment.".to_owned(),
        ),
        HeaderVerdict::NoComment { has_code: false } => (
            FailureKind::NoComment,
            "has no code comment at all.".to_owned(),
        ),
    };
    Some(ValidationFailure {
        file,
        kind,
        message,
    })
}
