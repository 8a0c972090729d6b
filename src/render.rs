//! HTML rendering.
//!
//! Parse, transform and stringify are all delegated to comrak; this module
//! only composes them and hands back the text.

use comrak::Arena;
use tracing::debug;

use crate::error::Result;
use crate::parser;

/// Render Markdown to an HTML fragment.
///
/// The newline comrak writes after the final block is dropped, so a single
/// heading renders as `<h1>...</h1>` with nothing after it. Newlines between
/// blocks are kept as the formatter writes them.
///
/// # Errors
///
/// Returns `Error::Render` if the formatter fails to write, and
/// `Error::Utf8` if its output is not UTF-8. Neither is recovered locally.
pub fn render_html(markdown: &str) -> Result<String> {
    debug!(input_len = markdown.len(), "rendering markdown to HTML");

    let arena = Arena::new();
    let options = parser::comrak_options();
    let root = parser::parse(&arena, markdown);

    let mut buffer = Vec::with_capacity(markdown.len() + markdown.len() / 2);
    comrak::format_html(root, &options, &mut buffer)?;

    let mut html = String::from_utf8(buffer)?;
    if html.ends_with('\n') {
        html.pop();
    }
    Ok(html)
}
