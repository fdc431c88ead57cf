//! Common display utilities and helpers

/// Placeholder for empty cells
pub const EMPTY_CELL: &str = "--";

/// Truncate string to at most `max_chars` characters with an ellipsis
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Collapse whitespace runs (including newlines) into single spaces
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
