//! Markdown-aware chunking.

use super::{Chunker, LineChunker};
use crate::utils::estimate_tokens;

/// Splits before every ATX heading (`#` through `######` followed by a space
/// or tab). Sections larger than `max_tokens` are re-split with [`LineChunker`].
#[derive(Debug, Clone, Copy)]
pub struct MarkdownChunker {
    max_tokens: usize,
    lines: LineChunker,
}

impl Default for MarkdownChunker {
    fn default() -> Self {
        Self::new(super::DEFAULT_MAX_TOKENS, super::DEFAULT_OVERLAP_TOKENS)
    }
}

impl MarkdownChunker {
    pub fn new(max_tokens: usize, overlap_tokens: usize) -> Self {
        let max_tokens = max_tokens.max(1);
        Self { max_tokens, lines: LineChunker::new(max_tokens, overlap_tokens) }
    }

    pub fn chunk(&self, content: &str) -> Vec<String> {
        let mut sections: Vec<String> = Vec::new();
        let mut current = String::new();
        for line in content.split_inclusive('\n') {
            if heading_level(line).is_some() && !current.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
            current.push_str(line);
        }
        sections.push(current);

        sections
            .into_iter()
            .filter(|section| !section.trim().is_empty())
            .flat_map(|section| {
                if estimate_tokens(&section) <= self.max_tokens {
                    vec![section]
                } else {
                    self.lines.chunk(&section)
                }
            })
            .collect()
    }
}

impl Chunker for MarkdownChunker {
    fn split(&self, text: &str) -> Vec<String> {
        self.chunk(text)
    }
}

/// Level of an ATX heading line, if it is one.
fn heading_level(line: &str) -> Option<usize> {
    let line = line.trim_start();
    let level = line.bytes().take_while(|&b| b == b'#').count();
    let followed_by_blank = line[level..].starts_with(|c: char| c == ' ' || c == '\t');
    ((1..=6).contains(&level) && followed_by_blank).then_some(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_headings() {
        let content = "# Title\nintro\n\n## Usage\nrun it\n### Notes\nnone";
        let chunks = MarkdownChunker::new(800, 0).chunk(content);
        assert_eq!(chunks, vec!["# Title\nintro\n\n", "## Usage\nrun it\n", "### Notes\nnone"]);
    }

    #[test]
    fn preamble_before_first_heading_is_kept() {
        let chunks = MarkdownChunker::new(800, 0).chunk("preamble\n# Head\nbody");
        assert_eq!(chunks, vec!["preamble\n", "# Head\nbody"]);
    }

    #[test]
    fn heading_levels() {
        assert_eq!(heading_level("# a"), Some(1));
        assert_eq!(heading_level("  ###\tb"), Some(3));
        assert_eq!(heading_level("#hashtag"), None);
        assert_eq!(heading_level("####### seven"), None);
        assert_eq!(heading_level("plain"), None);
    }

    #[test]
    fn oversized_sections_are_resplit_by_lines() {
        let content = "# A\n\nIntro\n\n# B\n".to_string() + &"line\n".repeat(200);
        let chunks = MarkdownChunker::new(80, 10).chunk(&content);
        assert!(chunks.len() > 2);
        assert_eq!(chunks[0], "# A\n\nIntro\n\n");
        assert!(chunks[1].starts_with("# B\n"));
    }
}
