//! Configuration options for chunk extraction and rendering.
//!
//! The `Options` struct controls which chunk groups are emitted and how
//! extracted values are post-processed. Defaults reproduce the plain
//! extraction behavior: every group enabled, values and URLs untouched.

/// Configuration options for chunk extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_mdchunks::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     include_images: false,
///     skip_empty_chunks: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Emit `Heading` chunks.
    ///
    /// Default: `true`
    pub include_headings: bool,

    /// Emit `Paragraph` chunks.
    ///
    /// Paragraphs nested inside list items are emitted here as well as
    /// contributing to their `ListItem` chunk.
    ///
    /// Default: `true`
    pub include_paragraphs: bool,

    /// Emit `Image` chunks.
    ///
    /// Default: `true`
    pub include_images: bool,

    /// Emit `ListItem` chunks.
    ///
    /// Default: `true`
    pub include_list_items: bool,

    /// Drop heading, paragraph and list item chunks whose value is empty.
    ///
    /// A paragraph holding only an image or only emphasized text flattens to
    /// an empty string. Image chunks are never dropped by this option.
    ///
    /// Default: `false`
    pub skip_empty_chunks: bool,

    /// Collapse whitespace runs in chunk values to a single space and trim.
    ///
    /// Default: `false`
    pub normalize_whitespace: bool,

    /// Base URL used to resolve relative image URLs.
    ///
    /// When `None` or unparseable, image URLs are emitted exactly as written.
    ///
    /// Default: `None`
    pub base_url: Option<String>,

    /// Encoding label used by the byte entry points when the input has no
    /// byte order mark and is not valid UTF-8 (e.g. `"windows-1252"`).
    ///
    /// Default: `None`
    pub default_encoding: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            include_headings: true,
            include_paragraphs: true,
            include_images: true,
            include_list_items: true,
            skip_empty_chunks: false,
            normalize_whitespace: false,
            base_url: None,
            default_encoding: None,
        }
    }
}

impl Options {
    /// Parsed `base_url`, if set and valid.
    #[must_use]
    pub(crate) fn parsed_base_url(&self) -> Option<url::Url> {
        self.base_url
            .as_deref()
            .and_then(|base| url::Url::parse(base.trim()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert!(opts.include_headings);
        assert!(opts.include_paragraphs);
        assert!(opts.include_images);
        assert!(opts.include_list_items);
        assert!(!opts.skip_empty_chunks);
        assert!(!opts.normalize_whitespace);
        assert!(opts.base_url.is_none());
        assert!(opts.default_encoding.is_none());
    }

    #[test]
    fn test_parsed_base_url() {
        let opts = Options {
            base_url: Some(" https://example.com/docs/ ".to_string()),
            ..Options::default()
        };
        let base = opts.parsed_base_url().expect("valid base url");
        assert_eq!(base.as_str(), "https://example.com/docs/");
    }

    #[test]
    fn test_invalid_base_url_is_ignored() {
        let opts = Options {
            base_url: Some("not a url".to_string()),
            ..Options::default()
        };
        assert!(opts.parsed_base_url().is_none());
    }
}
