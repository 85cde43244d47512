//! Free-text search helpers.
//!
//! Search is a case-insensitive substring match. User input is always treated
//! as a literal: it is escaped before being embedded in a `LIKE` pattern, so
//! `%` and `_` in a query match themselves instead of acting as wildcards.

/// Escape character used in generated `LIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Escape `LIKE` metacharacters (`%`, `_`, and the escape char itself).
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Build an `ILIKE` pattern matching `query` anywhere in a column.
///
/// # Examples
///
/// ```
/// use tracker_core::search::contains_pattern;
/// assert_eq!(contains_pattern("bridge"), "%bridge%");
/// assert_eq!(contains_pattern("50%"), "%50\\%%");
/// ```
pub fn contains_pattern(query: &str) -> String {
    format!("%{}%", escape_like(query))
}

/// Case-insensitive substring test used by in-process search.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
