//! Semantic chunk extraction.
//!
//! # Module Structure
//!
//! - `tags`: Node classification over comrak's AST
//! - `flatten`: The inline flattening table and its walker
//! - `state`: Per-kind chunk buffers
//! - `handlers`: One handler per chunk-producing node kind
//! - `pipeline`: Parse, walk and collect
//!
//! # Usage
//!
//! ```rust
//! use rs_mdchunks::extractor::pipeline;
//! use rs_mdchunks::{Chunk, Options};
//!
//! let chunks = pipeline::extract_chunks("# Title\n\nBody", &Options::default());
//! assert_eq!(chunks[0], Chunk::Heading { depth: 1, value: "Title".to_string() });
//! ```

pub mod flatten;
pub mod handlers;
pub mod pipeline;
pub mod state;
pub mod tags;

pub use flatten::{flatten_children, InlinePolicy};
pub use pipeline::{extract_chunks, walk_document};
pub use state::ExtractionState;
