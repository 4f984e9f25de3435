//! File content reading.

use crate::error::{Result, ScrapeError};
use std::fs;
use std::path::Path;

/// Read a file as UTF-8 and strip leading/trailing whitespace.
///
/// The file is opened, read fully and closed before returning. Invalid UTF-8
/// is reported as a read error rather than replaced.
pub fn read_text(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .map_err(|source| ScrapeError::Read { path: path.to_path_buf(), source })?;
    Ok(content.trim().to_string())
}
