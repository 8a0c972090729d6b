//! Node classification for the chunk walker.
//!
//! Maps comrak's open-ended `NodeValue` onto the closed sets of block and
//! inline kinds the extractor cares about. Everything else collapses into an
//! `Other` variant.

use comrak::nodes::{AstNode, ListType, NodeValue};

/// Block-level node kinds that produce chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Heading with its level.
    Heading(u8),
    Paragraph,
    Image,
    ListItem,
    /// Containers (document, list, block quote) and nodes that produce nothing.
    Other,
}

/// Inline node kinds, as seen by text flattening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    /// Plain text.
    Text,
    /// Inline code span.
    Code,
    /// Soft line break inside a paragraph.
    SoftBreak,
    /// Hard line break (trailing spaces or backslash).
    HardBreak,
    /// Raw inline HTML.
    Html,
    Link,
    Image,
    /// Emphasis, strong emphasis and strikethrough.
    Emphasis,
    Other,
}

/// Classify a node for the block walk.
#[must_use]
pub fn node_kind(node: &AstNode<'_>) -> NodeKind {
    match &node.data.borrow().value {
        NodeValue::Heading(heading) => NodeKind::Heading(heading.level),
        NodeValue::Paragraph => NodeKind::Paragraph,
        NodeValue::Image(_) => NodeKind::Image,
        NodeValue::Item(_) => NodeKind::ListItem,
        _ => NodeKind::Other,
    }
}

/// Classify a node value for inline flattening.
#[must_use]
pub fn inline_kind(value: &NodeValue) -> InlineKind {
    match value {
        NodeValue::Text(_) => InlineKind::Text,
        NodeValue::Code(_) => InlineKind::Code,
        NodeValue::SoftBreak => InlineKind::SoftBreak,
        NodeValue::LineBreak => InlineKind::HardBreak,
        NodeValue::HtmlInline(_) => InlineKind::Html,
        NodeValue::Link(_) => InlineKind::Link,
        NodeValue::Image(_) => InlineKind::Image,
        NodeValue::Emph | NodeValue::Strong | NodeValue::Strikethrough => InlineKind::Emphasis,
        _ => InlineKind::Other,
    }
}

/// Literal text carried by a node value, if any.
///
/// A soft break carries a newline, matching the text a wrapped line keeps.
/// Hard breaks carry no text.
#[must_use]
pub fn literal_text(value: &NodeValue) -> Option<&str> {
    match value {
        NodeValue::Text(text) => Some(text.as_str()),
        NodeValue::Code(code) => Some(code.literal.as_str()),
        NodeValue::SoftBreak => Some("\n"),
        _ => None,
    }
}

/// Whether `node` sits inside another image's description.
///
/// Such images are part of the outer image's alt text, not images of their own.
#[must_use]
pub fn is_inside_image<'a>(node: &'a AstNode<'a>) -> bool {
    node.ancestors()
        .skip(1)
        .any(|ancestor| matches!(ancestor.data.borrow().value, NodeValue::Image(_)))
}

/// Whether a list node is numbered.
#[must_use]
pub fn is_ordered_list(value: &NodeValue) -> Option<bool> {
    match value {
        NodeValue::List(list) | NodeValue::Item(list) => {
            Some(matches!(list.list_type, ListType::Ordered))
        }
        _ => None,
    }
}
