//! Configuration loading and merging
//!
//! The library itself is configured through call parameters only. The CLI
//! layers its settings with precedence CLI > Env > File > Defaults.

use crate::chunk::{ChunkerKind, DEFAULT_MAX_TOKENS, DEFAULT_OVERLAP_TOKENS};
use crate::scan::ScanOptions;
use serde::{Deserialize, Deserializer};

pub mod loader;

pub use loader::load_config;

/// Settings read from a `repo-scraper.toml` / `.yml` file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScraperConfig {
    #[serde(deserialize_with = "extension_list")]
    pub extensions: Option<Vec<String>>,
    #[serde(deserialize_with = "string_list")]
    pub ignore_paths: Option<Vec<String>>,
    pub follow_symlinks: bool,
    pub chunker: ChunkerKind,
    pub max_tokens: usize,
    pub overlap_tokens: usize,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            extensions: None,
            ignore_paths: None,
            follow_symlinks: false,
            chunker: ChunkerKind::None,
            max_tokens: DEFAULT_MAX_TOKENS,
            overlap_tokens: DEFAULT_OVERLAP_TOKENS,
        }
    }
}

impl ScraperConfig {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            extensions: self.extensions.clone(),
            ignore_paths: self.ignore_paths.clone(),
            follow_symlinks: self.follow_symlinks,
        }
    }
}

/// Normalize an extension: trim it and add the leading dot when missing.
/// Case is preserved since matching is case-sensitive.
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim();
    if ext.is_empty() || ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}

/// Split a comma-separated value into trimmed, non-empty parts.
pub fn split_csv(value: &str) -> Vec<String> {
    value.split(',').map(str::trim).filter(|part| !part.is_empty()).map(str::to_string).collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    One(String),
    Many(Vec<String>),
}

fn string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<StringOrList>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        StringOrList::One(s) => split_csv(&s),
        StringOrList::Many(items) => items
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    }))
}

fn extension_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let list = string_list(deserializer)?;
    Ok(list.map(|exts| exts.iter().map(|e| normalize_extension(e)).collect()))
}
