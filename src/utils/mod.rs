//! Shared helpers

pub mod paths;
pub mod text;
pub mod tokens;

pub use paths::normalize_path;
pub use text::read_text;
pub use tokens::estimate_tokens;
