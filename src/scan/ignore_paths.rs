//! Ignore-path filtering.
//!
//! Matching is plain substring containment against the file's directory path,
//! not a path-segment comparison: ignoring "data" also drops files under
//! "metadata".

use crate::utils::normalize_path;
use std::path::{Path, PathBuf};

/// Whether the directory containing `file` contains any of `ignore_paths`.
pub fn is_ignored(file: &Path, ignore_paths: &[String]) -> bool {
    let parent = file.parent().map(|p| normalize_path(&p.to_string_lossy())).unwrap_or_default();
    ignore_paths.iter().any(|ignored| parent.contains(normalize_path(ignored).as_str()))
}

/// Keep the files whose directory path matches none of `ignore_paths`,
/// preserving their order.
pub fn retain_unignored(files: Vec<PathBuf>, ignore_paths: &[String]) -> Vec<PathBuf> {
    let before = files.len();
    let kept: Vec<PathBuf> = files.into_iter().filter(|f| !is_ignored(f, ignore_paths)).collect();
    tracing::debug!("Ignore paths dropped {} of {} files", before - kept.len(), before);
    kept
}
