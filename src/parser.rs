//! Markdown parsing through comrak.
//!
//! Both the extractor and the renderer parse with the same options so that
//! chunks and HTML always see the same document structure. Only CommonMark
//! core syntax is enabled.

use comrak::nodes::AstNode;
use comrak::Arena;

/// Parser and formatter options shared by extraction and rendering.
#[must_use]
pub fn comrak_options() -> comrak::Options<'static> {
    comrak::Options::default()
}

/// Parse `markdown` into a document tree allocated in `arena`.
///
/// Never fails: malformed syntax is recovered by the parser as literal text.
pub fn parse<'a>(arena: &'a Arena<AstNode<'a>>, markdown: &str) -> &'a AstNode<'a> {
    comrak::parse_document(arena, markdown, &comrak_options())
}
