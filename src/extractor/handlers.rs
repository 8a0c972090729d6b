//! Per-kind chunk handlers.
//!
//! Each handler turns one block node into at most one chunk. Text values go
//! through `finish_value`, which applies whitespace normalization and the
//! empty-chunk filter from `Options`.

use comrak::nodes::{AstNode, NodeValue};
use url::Url;

use super::flatten::{flatten_children, InlinePolicy};
use super::tags::{is_ordered_list, node_kind, NodeKind};
use crate::chunk::Chunk;
use crate::text::normalize_whitespace;
use crate::url_utils::resolve_image_url;
use crate::Options;

/// Apply value post-processing. Returns `None` when the chunk should be dropped.
fn finish_value(value: String, opts: &Options) -> Option<String> {
    let value = if opts.normalize_whitespace {
        normalize_whitespace(&value)
    } else {
        value
    };

    if opts.skip_empty_chunks && value.is_empty() {
        return None;
    }
    Some(value)
}

/// Build a `Heading` chunk from the heading's direct literal children.
#[must_use]
pub fn handle_heading<'a>(node: &'a AstNode<'a>, depth: u8, opts: &Options) -> Option<Chunk> {
    let value = finish_value(flatten_children(node, InlinePolicy::DirectText), opts)?;
    Some(Chunk::Heading { depth, value })
}

/// Build a `Paragraph` chunk from text children and link labels.
#[must_use]
pub fn handle_paragraph<'a>(node: &'a AstNode<'a>, opts: &Options) -> Option<Chunk> {
    let value = finish_value(flatten_children(node, InlinePolicy::ParagraphText), opts)?;
    Some(Chunk::Paragraph { value })
}

/// Build an `Image` chunk. The URL is resolved only when `base` is set.
#[must_use]
pub fn handle_image<'a>(node: &'a AstNode<'a>, base: Option<&Url>, opts: &Options) -> Option<Chunk> {
    let url = match &node.data.borrow().value {
        NodeValue::Image(link) => resolve_image_url(&link.url, base),
        _ => return None,
    };

    let alt_text = flatten_children(node, InlinePolicy::AltText);
    let alt_text = if opts.normalize_whitespace {
        normalize_whitespace(&alt_text)
    } else {
        alt_text
    };

    Some(Chunk::Image { alt_text, url })
}

/// Build a `ListItem` chunk from the item's direct paragraph children.
///
/// Nested lists, code blocks and other block children are not part of the
/// value; nested items produce their own chunks.
#[must_use]
pub fn handle_list_item<'a>(node: &'a AstNode<'a>, opts: &Options) -> Option<Chunk> {
    let mut value = String::new();
    for child in node.children() {
        if node_kind(child) == NodeKind::Paragraph {
            value.push_str(&flatten_children(child, InlinePolicy::PlainText));
        }
    }

    let ordered = parent_list_is_ordered(node);
    let value = finish_value(value, opts)?;
    Some(Chunk::ListItem { value, ordered })
}

/// Ordering flag of the list directly containing `item`.
///
/// Falls back to the item's own list metadata if the parent is not a list.
fn parent_list_is_ordered<'a>(item: &'a AstNode<'a>) -> bool {
    let from_parent = item
        .parent()
        .and_then(|parent| is_ordered_list(&parent.data.borrow().value));

    from_parent
        .or_else(|| is_ordered_list(&item.data.borrow().value))
        .unwrap_or(false)
}
