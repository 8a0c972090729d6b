//! Extraction state tracking.
//!
//! This module provides `ExtractionState`, which collects chunks into one
//! buffer per chunk kind during the single tree walk. Buffers are concatenated
//! in group order (headings, paragraphs, images, list items) when the walk
//! finishes, so output order is by kind first and document order second.

use std::collections::HashSet;

use crate::chunk::{Chunk, ChunkKind};

/// Per-kind chunk buffers plus the set of kinds enabled for this extraction.
#[derive(Debug)]
pub struct ExtractionState {
    headings: Vec<Chunk>,
    paragraphs: Vec<Chunk>,
    images: Vec<Chunk>,
    list_items: Vec<Chunk>,

    /// Kinds that handlers should run for.
    enabled: HashSet<ChunkKind>,
}

impl Default for ExtractionState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionState {
    /// Create empty state with every kind enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            headings: Vec::new(),
            paragraphs: Vec::new(),
            images: Vec::new(),
            list_items: Vec::new(),
            enabled: ChunkKind::ALL.into_iter().collect(),
        }
    }

    /// Enable or disable kinds based on the `include_*` options.
    pub fn configure_from_options(&mut self, opts: &crate::Options) {
        let toggles = [
            (ChunkKind::Heading, opts.include_headings),
            (ChunkKind::Paragraph, opts.include_paragraphs),
            (ChunkKind::Image, opts.include_images),
            (ChunkKind::ListItem, opts.include_list_items),
        ];
        for (kind, include) in toggles {
            if include {
                self.enabled.insert(kind);
            } else {
                self.enabled.remove(&kind);
            }
        }
    }

    /// Check whether chunks of `kind` are collected.
    #[must_use]
    pub fn is_enabled(&self, kind: ChunkKind) -> bool {
        self.enabled.contains(&kind)
    }

    /// Append a chunk to its kind's buffer. Chunks of disabled kinds are dropped.
    pub fn push(&mut self, chunk: Chunk) {
        let kind = chunk.kind();
        if !self.is_enabled(kind) {
            return;
        }
        self.buffer_mut(kind).push(chunk);
    }

    /// Number of chunks collected for `kind`.
    #[must_use]
    pub fn count(&self, kind: ChunkKind) -> usize {
        self.buffer(kind).len()
    }

    /// Concatenate the buffers in group order.
    #[must_use]
    pub fn into_chunks(self) -> Vec<Chunk> {
        let total = self.headings.len() + self.paragraphs.len() + self.images.len() + self.list_items.len();
        let mut chunks = Vec::with_capacity(total);
        chunks.extend(self.headings);
        chunks.extend(self.paragraphs);
        chunks.extend(self.images);
        chunks.extend(self.list_items);
        chunks
    }

    fn buffer(&self, kind: ChunkKind) -> &Vec<Chunk> {
        match kind {
            ChunkKind::Heading => &self.headings,
            ChunkKind::Paragraph => &self.paragraphs,
            ChunkKind::Image => &self.images,
            ChunkKind::ListItem => &self.list_items,
        }
    }

    fn buffer_mut(&mut self, kind: ChunkKind) -> &mut Vec<Chunk> {
        match kind {
            ChunkKind::Heading => &mut self.headings,
            ChunkKind::Paragraph => &mut self.paragraphs,
            ChunkKind::Image => &mut self.images,
            ChunkKind::ListItem => &mut self.list_items,
        }
    }
}
