//! Token-budgeted line windows.

use super::Chunker;
use crate::utils::estimate_tokens;

/// Packs whole lines into windows of at most `max_tokens` estimated tokens.
///
/// A window that has to be cut is shortened to end after its last blank line,
/// provided that keeps at least half of it, so paragraphs stay together. The
/// next window repeats up to `overlap_tokens` worth of trailing lines.
/// A single line larger than the budget becomes a window of its own.
#[derive(Debug, Clone, Copy)]
pub struct LineChunker {
    max_tokens: usize,
    overlap_tokens: usize,
}

impl Default for LineChunker {
    fn default() -> Self {
        Self::new(super::DEFAULT_MAX_TOKENS, super::DEFAULT_OVERLAP_TOKENS)
    }
}

impl LineChunker {
    pub fn new(max_tokens: usize, overlap_tokens: usize) -> Self {
        Self { max_tokens: max_tokens.max(1), overlap_tokens }
    }

    pub fn chunk(&self, content: &str) -> Vec<String> {
        let lines: Vec<&str> = content.split_inclusive('\n').collect();
        let costs: Vec<usize> = lines.iter().map(|line| estimate_tokens(line).max(1)).collect();

        let mut windows = Vec::new();
        let mut start = 0usize;
        while start < lines.len() {
            let end = self.window_end(&lines, &costs, start);
            let text = lines[start..end].concat();
            if !text.trim().is_empty() {
                windows.push(text);
            }
            if end == lines.len() {
                break;
            }
            start = self.overlap_start(&costs, start, end);
        }
        windows
    }

    /// Exclusive end of the window starting at `start`; always past `start`.
    fn window_end(&self, lines: &[&str], costs: &[usize], start: usize) -> usize {
        let mut end = start;
        let mut used = 0usize;
        while end < lines.len() && (end == start || used + costs[end] <= self.max_tokens) {
            used += costs[end];
            end += 1;
        }
        if end == lines.len() {
            return end;
        }

        let keep_at_least = start + (end - start) / 2;
        (keep_at_least + 1..end).rev().find(|&cut| lines[cut - 1].trim().is_empty()).unwrap_or(end)
    }

    /// Where the window after `start..end` begins: back off over trailing
    /// lines while they fit the overlap budget, never back to `start`.
    fn overlap_start(&self, costs: &[usize], start: usize, end: usize) -> usize {
        let mut next = end;
        let mut carried = 0usize;
        while next > start + 1 && carried + costs[next - 1] <= self.overlap_tokens {
            carried += costs[next - 1];
            next -= 1;
        }
        next
    }
}

impl Chunker for LineChunker {
    fn split(&self, text: &str) -> Vec<String> {
        self.chunk(text)
    }
}
