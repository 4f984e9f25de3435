//! repo-scraper: turn a repository into an ordered file list and text chunks
//!
//! The [`RepositoryScraper`] walks a root directory, keeps files matching an
//! extension allow-list, drops files under ignored paths and splits the file
//! contents with an injected [`Chunker`].

pub mod chunk;
pub mod config;
pub mod error;
pub mod scan;
pub mod scraper;
pub mod utils;

pub use chunk::{Chunker, ChunkerKind};
pub use error::{Result, ScrapeError};
pub use scan::{locate_files, ScanOptions};
pub use scraper::RepositoryScraper;
