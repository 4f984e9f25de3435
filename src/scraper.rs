//! Repository scraper: owns the file list and the chunk list built from it.

use crate::chunk::Chunker;
use crate::error::{Result, ScrapeError};
use crate::scan::{locate_files, ScanOptions};
use crate::utils::read_text;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const BANNER: &str = "%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%";

/// Scrapes a repository into an ordered list of files and text chunks.
///
/// Both lists are replaced wholesale: [`rescan`](Self::rescan) rebuilds the
/// file list and the chunks together, [`rebuild_chunks`](Self::rebuild_chunks)
/// rebuilds only the chunks. File contents are never cached; every accessor
/// reads the file again.
pub struct RepositoryScraper {
    files: Vec<PathBuf>,
    chunks: Vec<String>,
    chunker: Option<Box<dyn Chunker>>,
}

impl fmt::Debug for RepositoryScraper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepositoryScraper")
            .field("files", &self.files)
            .field("chunks", &self.chunks.len())
            .field("chunker", &self.chunker.is_some())
            .finish()
    }
}

impl RepositoryScraper {
    /// Scan `root` and build chunks right away.
    ///
    /// Without a chunker the whole corpus becomes a single chunk.
    pub fn new(
        root: impl AsRef<Path>,
        options: &ScanOptions,
        chunker: Option<Box<dyn Chunker>>,
    ) -> Result<Self> {
        let mut scraper = Self { files: Vec::new(), chunks: Vec::new(), chunker };
        scraper.rescan(root, options)?;
        Ok(scraper)
    }

    /// Replace the file list with a fresh scan of `root`, then rebuild chunks.
    ///
    /// On error the previous file list and chunks are left untouched.
    pub fn rescan(&mut self, root: impl AsRef<Path>, options: &ScanOptions) -> Result<()> {
        let files = locate_files(root.as_ref(), options)?;
        let chunks = self.build_chunks(&files)?;
        self.files = files;
        self.chunks = chunks;
        Ok(())
    }

    /// Rebuild the chunk list from the current file list.
    pub fn rebuild_chunks(&mut self) -> Result<()> {
        self.chunks = self.build_chunks(&self.files)?;
        Ok(())
    }

    /// Swap the chunking function and rebuild the chunks with it.
    pub fn set_chunker(&mut self, chunker: Option<Box<dyn Chunker>>) -> Result<()> {
        let previous = std::mem::replace(&mut self.chunker, chunker);
        if let Err(e) = self.rebuild_chunks() {
            self.chunker = previous;
            return Err(e);
        }
        Ok(())
    }

    fn build_chunks(&self, files: &[PathBuf]) -> Result<Vec<String>> {
        let chunks = match &self.chunker {
            Some(chunker) => {
                let mut chunks = Vec::new();
                for path in files {
                    let file_chunks = chunker.split(&read_text(path)?);
                    tracing::debug!("{} -> {} chunks", path.display(), file_chunks.len());
                    chunks.extend(file_chunks);
                }
                chunks
            }
            None => {
                let mut merged = String::new();
                for path in files {
                    merged.push_str(&read_text(path)?);
                    merged.push_str("\n\n");
                }
                vec![merged]
            }
        };
        tracing::info!("Built {} chunks from {} files", chunks.len(), files.len());
        Ok(chunks)
    }

    /// Validate `idx` against the file list.
    ///
    /// Accepts signed input so callers holding a negative index get a range
    /// error instead of a wrapped-around position.
    pub fn check_index(&self, idx: i64) -> Result<usize> {
        let len = self.files.len();
        usize::try_from(idx)
            .ok()
            .filter(|&i| i < len)
            .ok_or(ScrapeError::IndexOutOfRange { index: idx, len })
    }

    fn check(&self, idx: usize) -> Result<usize> {
        let len = self.files.len();
        if idx < len {
            Ok(idx)
        } else {
            Err(ScrapeError::IndexOutOfRange { index: i64::try_from(idx).unwrap_or(i64::MAX), len })
        }
    }

    /// Path of the file at `idx`.
    pub fn path(&self, idx: usize) -> Result<&Path> {
        let idx = self.check(idx)?;
        Ok(&self.files[idx])
    }

    /// Read the file at `idx` from disk, stripped of surrounding whitespace.
    pub fn file_content(&self, idx: usize) -> Result<String> {
        read_text(self.path(idx)?)
    }

    /// Same as [`file_content`](Self::file_content); returns the file's text,
    /// not one of its chunks.
    pub fn get(&self, idx: usize) -> Result<String> {
        self.file_content(idx)
    }

    /// Chunks of a single file.
    ///
    /// Fails with [`ScrapeError::ChunkingUnavailable`] when no chunker is set,
    /// since the merged corpus has no per-file view.
    pub fn chunks_for_file(&self, idx: usize) -> Result<Vec<String>> {
        let content = self.file_content(idx)?;
        match &self.chunker {
            Some(chunker) => Ok(chunker.split(&content)),
            None => Err(ScrapeError::ChunkingUnavailable),
        }
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    pub fn has_chunker(&self) -> bool {
        self.chunker.is_some()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Write the file at `idx` to `out`, framed by its path and banners when
    /// `extended` is set.
    pub fn write_file<W: Write>(&self, out: &mut W, idx: usize, extended: bool) -> Result<()> {
        let path = self.path(idx)?;
        let content = self.file_content(idx)?;
        if extended {
            writeln!(out, "\n{BANNER}")?;
            writeln!(out, "File {}: {}\n", idx, path.display())?;
            writeln!(out, "{content}")?;
            writeln!(out, "{BANNER}\n")?;
        } else {
            writeln!(out, "{content}")?;
        }
        Ok(())
    }

    /// Write every file, in file-list order.
    pub fn write_all_files<W: Write>(&self, out: &mut W, extended: bool) -> Result<()> {
        for idx in 0..self.files.len() {
            self.write_file(out, idx, extended)?;
        }
        Ok(())
    }

    /// Print the file at `idx` to stdout.
    pub fn print_file(&self, idx: usize, extended: bool) -> Result<()> {
        self.write_file(&mut io::stdout().lock(), idx, extended)
    }

    /// Print every file to stdout.
    pub fn print_all_files(&self, extended: bool) -> Result<()> {
        self.write_all_files(&mut io::stdout().lock(), extended)
    }
}
