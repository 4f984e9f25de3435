//! Recursive file enumeration with an optional extension allow-list.

use crate::error::{Result, ScrapeError};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Enumerates files below a root directory.
///
/// Within each directory, files are yielded before subdirectories and both are
/// visited in file-name order, so repeated calls on an unchanged tree return
/// the same list.
pub struct FileLocator {
    root_path: PathBuf,
    extensions: Option<Vec<String>>,
    follow_symlinks: bool,
}

impl FileLocator {
    /// Create a locator that keeps every file.
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path, extensions: None, follow_symlinks: false }
    }

    /// Keep only files whose extension (with the leading dot, e.g. ".md") is
    /// exactly one of `extensions`. Matching is case-sensitive. An empty list
    /// disables the filter.
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = if extensions.is_empty() { None } else { Some(extensions) };
        self
    }

    /// Set whether to follow symbolic links
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    fn should_include(&self, path: &Path) -> bool {
        match &self.extensions {
            Some(allowed) => {
                let ext = file_extension(path);
                allowed.iter().any(|a| *a == ext)
            }
            None => true,
        }
    }

    /// Walk the tree and return the matching file paths.
    ///
    /// Any traversal error aborts the walk; no partial list is returned.
    pub fn locate(&self) -> Result<Vec<PathBuf>> {
        let walker = WalkDir::new(&self.root_path)
            .follow_links(self.follow_symlinks)
            .sort_by(files_before_dirs);

        let mut files = Vec::new();
        let mut seen = 0usize;
        for entry_result in walker {
            let entry = entry_result
                .map_err(|source| ScrapeError::Walk { root: self.root_path.clone(), source })?;

            if !is_regular_file(&entry) {
                continue;
            }
            seen += 1;

            if self.should_include(entry.path()) {
                files.push(entry.into_path());
            }
        }

        tracing::debug!(
            "Located {} files under {} ({} skipped by extension)",
            files.len(),
            self.root_path.display(),
            seen - files.len()
        );
        Ok(files)
    }
}

fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

fn files_before_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_dir = a.file_type().is_dir();
    let b_dir = b.file_type().is_dir();
    a_dir.cmp(&b_dir).then_with(|| a.file_name().cmp(b.file_name()))
}

/// Extension of `path` including the leading dot, or "" when there is none.
///
/// Leading dots of the file name do not start an extension, so ".bashrc" has
/// no extension while "archive.tar.gz" has ".gz".
pub fn file_extension(path: &Path) -> String {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return String::new(),
    };
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(dot) => name[stem_start + dot..].to_string(),
        None => String::new(),
    }
}
