//! Chunk types for extraction output.
//!
//! A chunk is one typed record pulled out of a Markdown document. The serde
//! representation uses an internal `type` tag with camelCase names, e.g.
//! `{"type":"listItem","value":"Item 1","ordered":false}`.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One semantically typed record extracted from a Markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Chunk {
    /// An ATX or setext heading.
    Heading {
        /// Heading level, 1 through 6.
        depth: u8,
        /// Literal text of the heading's direct inline children.
        value: String,
    },

    /// A paragraph, including paragraphs nested inside list items.
    Paragraph {
        /// Plain text of the paragraph with link labels kept.
        value: String,
    },

    /// An image, wherever it occurs in the document.
    Image {
        /// Image description as plain text.
        #[serde(rename = "altText")]
        alt_text: String,
        /// Image destination.
        url: String,
    },

    /// An item of an ordered or bulleted list.
    ListItem {
        /// Flattened text of the item's paragraphs.
        value: String,
        /// Whether the enclosing list is numbered.
        ordered: bool,
    },
}

/// Discriminant of a [`Chunk`].
///
/// The declaration order is the order in which groups appear in extraction
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChunkKind {
    Heading,
    Paragraph,
    Image,
    ListItem,
}

impl ChunkKind {
    /// All kinds in output group order.
    pub const ALL: [ChunkKind; 4] = [
        ChunkKind::Heading,
        ChunkKind::Paragraph,
        ChunkKind::Image,
        ChunkKind::ListItem,
    ];

    /// Name used for the serde `type` tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ChunkKind::Heading => "heading",
            ChunkKind::Paragraph => "paragraph",
            ChunkKind::Image => "image",
            ChunkKind::ListItem => "listItem",
        }
    }
}

impl std::fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Chunk {
    /// The kind of this chunk.
    #[must_use]
    pub const fn kind(&self) -> ChunkKind {
        match self {
            Chunk::Heading { .. } => ChunkKind::Heading,
            Chunk::Paragraph { .. } => ChunkKind::Paragraph,
            Chunk::Image { .. } => ChunkKind::Image,
            Chunk::ListItem { .. } => ChunkKind::ListItem,
        }
    }

    /// The chunk's primary text: `value`, or `alt_text` for images.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Chunk::Heading { value, .. }
            | Chunk::Paragraph { value }
            | Chunk::ListItem { value, .. } => value,
            Chunk::Image { alt_text, .. } => alt_text,
        }
    }
}

/// Serialize chunks to a JSON array.
///
/// # Example
///
/// ```rust
/// use rs_mdchunks::{chunks_to_json, Chunk};
///
/// let chunks = vec![Chunk::Heading { depth: 1, value: "Title".to_string() }];
/// let json = chunks_to_json(&chunks)?;
/// assert_eq!(json, r#"[{"type":"heading","depth":1,"value":"Title"}]"#);
/// # Ok::<(), rs_mdchunks::Error>(())
/// ```
pub fn chunks_to_json(chunks: &[Chunk]) -> Result<String> {
    Ok(serde_json::to_string(chunks)?)
}
