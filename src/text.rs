//! Plain-text helpers applied to extracted chunk values.

use crate::patterns::WHITESPACE_RUN;

/// Collapse whitespace runs to a single space and trim both ends.
///
/// # Examples
///
/// ```
/// use rs_mdchunks::text::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  first line\nsecond\t line "), "first line second line");
/// ```
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}
