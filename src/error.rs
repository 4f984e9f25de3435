//! Error types for scanning, reading and chunking.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// An index outside `[0, len)` was used against the file list.
    #[error("Index {index} is out of range for the files list with length {len}.")]
    IndexOutOfRange { index: i64, len: usize },

    /// A file could not be opened, read or decoded as UTF-8.
    #[error("Failed reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed (permission denied, vanished directory, ...).
    #[error("Failed walking {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Printing file contents to the output stream failed.
    #[error("Failed writing output: {0}")]
    Write(#[from] std::io::Error),

    /// Per-file chunks were requested but no chunker is configured.
    #[error("No chunking function configured; chunks are only available as one merged corpus")]
    ChunkingUnavailable,
}

impl ScrapeError {
    #[cfg(test)]
    pub(crate) fn is_out_of_range(&self) -> bool {
        matches!(self, ScrapeError::IndexOutOfRange { .. })
    }
}
