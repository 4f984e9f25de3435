//! Chunking strategies.
//!
//! The scraper only sees the [`Chunker`] trait: anything that turns one file's
//! text into an ordered list of fragments. Closures of type
//! `Fn(&str) -> Vec<String>` implement it directly, so embedding applications
//! can plug in token-aware or semantic splitters without wrapping them.

use clap::ValueEnum;
use serde::Deserialize;

pub use line_chunker::LineChunker;
pub use markdown_chunker::MarkdownChunker;

pub mod line_chunker;
pub mod markdown_chunker;

pub const DEFAULT_MAX_TOKENS: usize = 800;
pub const DEFAULT_OVERLAP_TOKENS: usize = 120;

/// Splits a file's text into an ordered sequence of fragments.
///
/// Returning an empty vector is allowed; the file then contributes nothing.
pub trait Chunker {
    fn split(&self, text: &str) -> Vec<String>;
}

impl<F> Chunker for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn split(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// One fragment per whitespace-separated word.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceChunker;

impl Chunker for WhitespaceChunker {
    fn split(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}

/// One fragment per blank-line separated paragraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphChunker;

impl Chunker for ParagraphChunker {
    fn split(&self, text: &str) -> Vec<String> {
        let mut paragraphs = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    paragraphs.push(current.join("\n").trim().to_string());
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            paragraphs.push(current.join("\n").trim().to_string());
        }
        paragraphs
    }
}

/// Built-in strategy selectable from the command line or a config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkerKind {
    /// Merge every file into a single chunk
    #[default]
    None,
    /// One chunk per whitespace-separated word
    Whitespace,
    /// One chunk per blank-line separated paragraph
    Paragraphs,
    /// Token-budgeted windows of lines
    Lines,
    /// Heading-delimited sections, re-split by lines when over budget
    Markdown,
}

impl ChunkerKind {
    /// Build the chunker, or `None` for whole-corpus concatenation.
    pub fn build(self, max_tokens: usize, overlap_tokens: usize) -> Option<Box<dyn Chunker>> {
        match self {
            ChunkerKind::None => None,
            ChunkerKind::Whitespace => Some(Box::new(WhitespaceChunker)),
            ChunkerKind::Paragraphs => Some(Box::new(ParagraphChunker)),
            ChunkerKind::Lines => Some(Box::new(LineChunker::new(max_tokens, overlap_tokens))),
            ChunkerKind::Markdown => {
                Some(Box::new(MarkdownChunker::new(max_tokens, overlap_tokens)))
            }
        }
    }
}
