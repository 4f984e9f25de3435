//! Shared CLI arguments and scraper construction.

use anyhow::{Context, Result};
use clap::Args;
use repo_scraper::chunk::ChunkerKind;
use repo_scraper::config::{load_config, normalize_extension, split_csv, ScraperConfig};
use repo_scraper::RepositoryScraper;
use std::path::PathBuf;

#[derive(Args)]
pub struct ScanArgs {
    /// Repository root to scan
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Keep only these extensions, case-sensitive (comma-separated, e.g. ".md,.txt")
    #[arg(short = 'x', long = "ext", value_name = "EXTS", env = "REPO_SCRAPER_EXT")]
    pub extensions: Option<String>,

    /// Drop files whose directory path contains any of these substrings (comma-separated)
    #[arg(short = 'I', long, value_name = "PATHS", env = "REPO_SCRAPER_IGNORE")]
    pub ignore: Option<String>,

    /// Config file (defaults to repo-scraper.toml/.yml in PATH when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Follow symbolic links when scanning
    #[arg(long)]
    pub follow_symlinks: bool,
}

#[derive(Args)]
pub struct ChunkArgs {
    /// Chunking strategy; "none" merges every file into one chunk
    #[arg(long, value_enum, value_name = "KIND", env = "REPO_SCRAPER_CHUNKER")]
    pub chunker: Option<ChunkerKind>,

    /// Target chunk size in estimated tokens (lines/markdown)
    #[arg(long, value_name = "N")]
    pub max_tokens: Option<usize>,

    /// Overlap between consecutive chunks in estimated tokens (lines/markdown)
    #[arg(long, value_name = "N")]
    pub overlap_tokens: Option<usize>,
}

/// Merge CLI flags over the config file.
pub fn resolve_config(scan: &ScanArgs, chunk: Option<&ChunkArgs>) -> Result<ScraperConfig> {
    if !scan.path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", scan.path.display());
    }

    let mut config = load_config(&scan.path, scan.config.as_deref())?;

    if let Some(exts) = &scan.extensions {
        config.extensions = Some(split_csv(exts).iter().map(|e| normalize_extension(e)).collect());
    }
    if let Some(ignore) = &scan.ignore {
        config.ignore_paths = Some(split_csv(ignore));
    }
    if scan.follow_symlinks {
        config.follow_symlinks = true;
    }

    if let Some(chunk) = chunk {
        if let Some(kind) = chunk.chunker {
            config.chunker = kind;
        }
        if let Some(max_tokens) = chunk.max_tokens {
            config.max_tokens = max_tokens;
        }
        if let Some(overlap_tokens) = chunk.overlap_tokens {
            config.overlap_tokens = overlap_tokens;
        }
    }

    tracing::debug!("Resolved config: {:?}", config);
    Ok(config)
}

pub fn build_scraper(scan: &ScanArgs, chunk: Option<&ChunkArgs>) -> Result<RepositoryScraper> {
    let config = resolve_config(scan, chunk)?;
    let chunker = config.chunker.build(config.max_tokens, config.overlap_tokens);
    RepositoryScraper::new(&scan.path, &config.scan_options(), chunker)
        .with_context(|| format!("Failed scraping {}", scan.path.display()))
}
