//! # rs-mdchunks
//!
//! Markdown to HTML rendering and semantic chunk extraction.
//!
//! This library turns Markdown into a flat list of typed chunks (headings,
//! paragraphs, images and list items) for indexing or summarization, and
//! renders the same Markdown to HTML. Parsing and HTML formatting are done by
//! [`comrak`]; this crate owns the tree walk and the text flattening.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_mdchunks::{extract_semantic_chunks, markdown_to_html, Chunk};
//!
//! let chunks = extract_semantic_chunks("# Heading\nSome paragraph text.");
//! assert_eq!(
//!     chunks,
//!     vec![
//!         Chunk::Heading { depth: 1, value: "Heading".to_string() },
//!         Chunk::Paragraph { value: "Some paragraph text.".to_string() },
//!     ]
//! );
//!
//! assert_eq!(markdown_to_html("# Heading 1")?, "<h1>Heading 1</h1>");
//! # Ok::<(), rs_mdchunks::Error>(())
//! ```
//!
//! ## Output order
//!
//! Chunks are grouped by kind: all headings, then all paragraphs, then all
//! images, then all list items. Within a group they follow document order.
//! Paragraphs inside list items appear both as `Paragraph` chunks and as part
//! of their `ListItem` chunk.
//!
//! ```rust
//! use rs_mdchunks::{extract_semantic_chunks, ChunkKind};
//!
//! let chunks = extract_semantic_chunks("![logo](logo.png)\n\n# Title\n\n- item");
//! let kinds: Vec<ChunkKind> = chunks.iter().map(|chunk| chunk.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [ChunkKind::Heading, ChunkKind::Paragraph, ChunkKind::Paragraph, ChunkKind::Image, ChunkKind::ListItem]
//! );
//! ```

mod chunk;
mod error;
mod options;
mod patterns;
mod processor;

/// Markdown parsing through comrak.
pub mod parser;

/// Semantic chunk extraction (node classification, flattening, tree walk).
pub mod extractor;

/// HTML rendering pipeline.
pub mod render;

/// Character encoding detection and transcoding.
pub mod encoding;

/// URL utilities for image destinations.
pub mod url_utils;

/// Plain-text helpers for chunk values.
pub mod text;

// Public API - re-exports
pub use chunk::{chunks_to_json, Chunk, ChunkKind};
pub use error::{Error, Result};
pub use options::Options;
pub use processor::MarkdownProcessor;

/// Extracts semantic chunks from Markdown using default options.
///
/// Never fails. Empty input yields an empty vector.
///
/// # Example
///
/// ```rust
/// use rs_mdchunks::{extract_semantic_chunks, Chunk};
///
/// let chunks = extract_semantic_chunks("1. First");
/// assert_eq!(chunks[1], Chunk::ListItem { value: "First".to_string(), ordered: true });
/// ```
#[must_use]
pub fn extract_semantic_chunks(markdown: &str) -> Vec<Chunk> {
    extract_semantic_chunks_with_options(markdown, &Options::default())
}

/// Extracts semantic chunks from Markdown with custom options.
///
/// # Example
///
/// ```rust
/// use rs_mdchunks::{extract_semantic_chunks_with_options, Chunk, Options};
///
/// let options = Options {
///     skip_empty_chunks: true,
///     base_url: Some("https://example.com/docs/".to_string()),
///     ..Options::default()
/// };
/// let chunks = extract_semantic_chunks_with_options("![Logo](logo.png)", &options);
/// assert_eq!(
///     chunks,
///     vec![Chunk::Image {
///         alt_text: "Logo".to_string(),
///         url: "https://example.com/docs/logo.png".to_string(),
///     }]
/// );
/// ```
#[must_use]
pub fn extract_semantic_chunks_with_options(markdown: &str, options: &Options) -> Vec<Chunk> {
    extractor::extract_chunks(markdown, options)
}

/// Extracts semantic chunks from Markdown bytes with automatic encoding detection.
///
/// A byte order mark selects UTF-8 or UTF-16; otherwise the input is read as
/// UTF-8 with invalid sequences replaced by �.
#[must_use]
pub fn extract_semantic_chunks_bytes(markdown: &[u8]) -> Vec<Chunk> {
    extract_semantic_chunks_bytes_with_options(markdown, &Options::default())
}

/// Extracts semantic chunks from Markdown bytes with custom options.
///
/// `options.default_encoding` is used when the bytes carry no BOM and are
/// not valid UTF-8.
///
/// # Example
///
/// ```rust
/// use rs_mdchunks::{extract_semantic_chunks_bytes_with_options, Chunk, Options};
///
/// let options = Options {
///     default_encoding: Some("windows-1252".to_string()),
///     ..Options::default()
/// };
/// let chunks = extract_semantic_chunks_bytes_with_options(b"Caf\xE9", &options);
/// assert_eq!(chunks, vec![Chunk::Paragraph { value: "Café".to_string() }]);
/// ```
#[must_use]
pub fn extract_semantic_chunks_bytes_with_options(markdown: &[u8], options: &Options) -> Vec<Chunk> {
    let text = encoding::transcode_to_utf8(markdown, options.default_encoding.as_deref());
    extract_semantic_chunks_with_options(&text, options)
}

/// Renders Markdown to an HTML fragment.
///
/// # Example
///
/// ```rust
/// use rs_mdchunks::markdown_to_html;
///
/// assert_eq!(markdown_to_html("# Heading 1")?, "<h1>Heading 1</h1>");
/// # Ok::<(), rs_mdchunks::Error>(())
/// ```
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    render::render_html(markdown)
}

/// Renders Markdown bytes to HTML with automatic encoding detection.
pub fn markdown_to_html_bytes(markdown: &[u8]) -> Result<String> {
    let text = encoding::transcode_to_utf8(markdown, None);
    markdown_to_html(&text)
}
