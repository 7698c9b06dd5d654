//! Free-text sanitization helpers.
//!
//! Multi-line fields split on newlines; delimited fields additionally treat
//! the Japanese enumeration commas (`、`, `，`) and the ASCII comma as item
//! separators. Items are trimmed and empty items are dropped, preserving
//! input order.

/// Item separators accepted in delimited fields besides the newline.
const ITEM_DELIMITERS: [char; 3] = ['、', '，', ','];

/// Split a multi-line field into trimmed, non-empty items.
pub fn sanitize_lines(input: &str) -> Vec<String> {
    input
        .split('\n')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a field on newlines and enumeration commas into trimmed, non-empty items.
pub fn sanitize_delimited(input: &str) -> Vec<String> {
    let normalized: String =
        input.chars().map(|c| if ITEM_DELIMITERS.contains(&c) { '\n' } else { c }).collect();
    sanitize_lines(&normalized)
}
