//! Error types for rs-mdchunks.
//!
//! Chunk extraction never fails. Errors only surface from the HTML rendering
//! pipeline and from serializing chunks to JSON.

/// Error type for rendering and serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTML formatter failed while writing its output.
    #[error("HTML rendering failed: {0}")]
    Render(#[from] std::io::Error),

    /// The rendered HTML was not valid UTF-8.
    #[error("Rendered HTML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Chunks could not be serialized.
    #[error("Chunk serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for rendering and serialization operations.
pub type Result<T> = std::result::Result<T, Error>;
