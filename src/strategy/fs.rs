//! Filesystem validation source.
//!
//! Discovers candidate files on disk for the validation pipeline. Unlike the
//! per-file header failures, anything the filesystem refuses — an unreadable
//! directory, a traversal error, a vanished entry — is fatal and aborts the
//! whole run.

use std::path::{Path, PathBuf};

use anyhow::Context;
use walkdir::WalkDir;

use crate::config::ScanConfig;

/// Check whether a path carries the target extension. Case-sensitive.
fn matches_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

/// Find all candidate files under the config root.
///
/// Candidates are regular files whose extension equals the config's target
/// extension. Paths come back in traversal order — depth-first, siblings in
/// directory listing order; callers must not assume more than that.
///
/// # Errors
///
/// Returns an error on any directory traversal failure (permission denied,
/// filesystem loop, root removed mid-walk). No partial result is produced.
pub fn find_candidates(config: &ScanConfig) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry_result in WalkDir::new(&config.root) {
        let entry = entry_result.with_context(|| {
            format!("Directory traversal failed under {}", config.root.display())
        })?;
        if entry.file_type().is_file() && matches_extension(entry.path(), &config.extension) {
            files.push(entry.path().to_path_buf());
        }
    }
    Ok(files)
}
