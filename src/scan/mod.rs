//! File discovery: recursive enumeration plus extension and ignore-path filtering

use crate::error::Result;
use std::path::{Path, PathBuf};

pub mod ignore_paths;
pub mod locator;

pub use ignore_paths::retain_unignored;
pub use locator::{file_extension, FileLocator};

/// Filters applied when building a file list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Extensions to keep, with the leading dot (e.g. ".md"). `None` keeps everything.
    pub extensions: Option<Vec<String>>,
    /// Substrings; a file whose directory path contains any of them is dropped.
    pub ignore_paths: Option<Vec<String>>,
    /// Follow symbolic links while walking.
    pub follow_symlinks: bool,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    pub fn ignore_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_paths = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

/// Locate every file under `root` that passes the extension filter, then drop
/// the ones sitting under an ignored path.
pub fn locate_files(root: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>> {
    let mut locator = FileLocator::new(root.to_path_buf()).follow_symlinks(options.follow_symlinks);
    if let Some(extensions) = &options.extensions {
        locator = locator.extensions(extensions.clone());
    }
    let located = locator.locate()?;

    let files = match &options.ignore_paths {
        Some(ignore) => retain_unignored(located, ignore),
        None => located,
    };

    tracing::info!("Selected {} files under {}", files.len(), root.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_locate_files_combines_both_filters() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("docs")).unwrap();
        fs::create_dir_all(root.join("vendor")).unwrap();
        fs::write(root.join("docs/guide.md"), "guide").unwrap();
        fs::write(root.join("docs/notes.txt"), "notes").unwrap();
        fs::write(root.join("vendor/lib.md"), "vendored").unwrap();

        let options = ScanOptions::new().extensions([".md"]).ignore_paths(["vendor"]);
        let files = locate_files(root, &options).unwrap();

        assert_eq!(files, vec![root.join("docs/guide.md")]);
    }

    #[test]
    fn test_locate_files_without_filters_keeps_everything() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.md"), "a").unwrap();
        fs::write(root.join("Makefile"), "all:").unwrap();

        let files = locate_files(root, &ScanOptions::default()).unwrap();
        assert_eq!(files.len(), 2);
    }
}
