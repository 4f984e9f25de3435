//! Token estimation

/// Estimate tokens using a simple heuristic (chars / 4).
///
/// Counts Unicode code points, not bytes, so multi-byte UTF-8 content
/// (CJK text, emoji) is not over-counted.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4
}
