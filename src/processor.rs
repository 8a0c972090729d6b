//! Configured façade over extraction and rendering.

use crate::chunk::Chunk;
use crate::error::Result;
use crate::{encoding, extractor, render, Options};

/// Markdown processor carrying only immutable configuration.
///
/// Every call parses its input afresh, so one processor can be shared by
/// reference across threads and reused indefinitely.
///
/// # Example
///
/// ```rust
/// use rs_mdchunks::{Chunk, MarkdownProcessor};
///
/// let processor = MarkdownProcessor::new();
/// let chunks = processor.extract_semantic_chunks("# Heading\nSome paragraph text.");
/// assert_eq!(chunks[0], Chunk::Heading { depth: 1, value: "Heading".to_string() });
///
/// let html = processor.markdown_to_html("# Heading 1")?;
/// assert_eq!(html, "<h1>Heading 1</h1>");
/// # Ok::<(), rs_mdchunks::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarkdownProcessor {
    options: Options,
}

impl MarkdownProcessor {
    /// Processor with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processor with custom options.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// The options this processor extracts with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Extract typed chunks, grouped headings, paragraphs, images, list items.
    #[must_use]
    pub fn extract_semantic_chunks(&self, markdown: &str) -> Vec<Chunk> {
        extractor::extract_chunks(markdown, &self.options)
    }

    /// Extract chunks from raw bytes, detecting the encoding first.
    #[must_use]
    pub fn extract_semantic_chunks_bytes(&self, markdown: &[u8]) -> Vec<Chunk> {
        let text = encoding::transcode_to_utf8(markdown, self.options.default_encoding.as_deref());
        self.extract_semantic_chunks(&text)
    }

    /// Render Markdown to HTML. Options do not affect rendering.
    #[allow(clippy::unused_self)]
    pub fn markdown_to_html(&self, markdown: &str) -> Result<String> {
        render::render_html(markdown)
    }

    /// Render Markdown bytes to HTML, detecting the encoding first.
    pub fn markdown_to_html_bytes(&self, markdown: &[u8]) -> Result<String> {
        let text = encoding::transcode_to_utf8(markdown, self.options.default_encoding.as_deref());
        self.markdown_to_html(&text)
    }
}
