//! Chunk extraction pipeline.
//!
//! One depth-first, pre-order walk over the document dispatches each block
//! node to its handler. Handlers push into per-kind buffers, which are
//! concatenated in group order at the end.

use comrak::nodes::AstNode;
use comrak::Arena;
use tracing::{debug, trace};

use super::handlers::{handle_heading, handle_image, handle_list_item, handle_paragraph};
use super::state::ExtractionState;
use super::tags::{is_inside_image, node_kind, NodeKind};
use crate::chunk::{Chunk, ChunkKind};
use crate::parser;
use crate::Options;

/// Parse `markdown` and extract its chunks.
#[must_use]
pub fn extract_chunks(markdown: &str, opts: &Options) -> Vec<Chunk> {
    debug!(input_len = markdown.len(), "extracting semantic chunks");

    let arena = Arena::new();
    let root = parser::parse(&arena, markdown);
    walk_document(root, opts)
}

/// Walk an already-parsed document and collect its chunks.
#[must_use]
pub fn walk_document<'a>(root: &'a AstNode<'a>, opts: &Options) -> Vec<Chunk> {
    let mut state = ExtractionState::new();
    state.configure_from_options(opts);
    let base = opts.parsed_base_url();
    if opts.base_url.is_some() && base.is_none() {
        debug!(base_url = ?opts.base_url, "ignoring unparseable base URL");
    }

    for node in root.descendants() {
        let kind = node_kind(node);
        trace!(?kind, "visit");

        let chunk = match kind {
            NodeKind::Heading(depth) if state.is_enabled(ChunkKind::Heading) => {
                handle_heading(node, depth, opts)
            }
            NodeKind::Paragraph if state.is_enabled(ChunkKind::Paragraph) => {
                handle_paragraph(node, opts)
            }
            NodeKind::Image if state.is_enabled(ChunkKind::Image) && !is_inside_image(node) => {
                handle_image(node, base.as_ref(), opts)
            }
            NodeKind::ListItem if state.is_enabled(ChunkKind::ListItem) => {
                handle_list_item(node, opts)
            }
            _ => None,
        };

        if let Some(chunk) = chunk {
            trace!(kind = %chunk.kind(), text_len = chunk.text().len(), "chunk");
            state.push(chunk);
        }
    }

    debug!(
        headings = state.count(ChunkKind::Heading),
        paragraphs = state.count(ChunkKind::Paragraph),
        images = state.count(ChunkKind::Image),
        list_items = state.count(ChunkKind::ListItem),
        "extraction complete"
    );

    state.into_chunks()
}
