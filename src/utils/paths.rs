//! Path normalization

pub fn normalize_path(path: &str) -> String {
    // Convert backslashes to forward slashes so ignore entries like
    // "docs/api" match on every platform.
    path.replace('\\', "/")
}
