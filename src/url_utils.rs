//! URL utilities for image destinations.
//!
//! Image URLs are emitted exactly as written unless a base URL is configured,
//! in which case relative references are resolved against it.

use url::Url;

use crate::patterns::URL_SCHEME;

/// Check whether a URL reference carries its own scheme.
///
/// Scheme-relative references (`//cdn.example.com/a.png`) are not absolute:
/// they still need a base to pick up the scheme.
#[must_use]
pub fn has_scheme(s: &str) -> bool {
    URL_SCHEME.is_match(s)
}

/// Resolve an image URL against an optional base.
///
/// # Arguments
/// * `url_str` - The image destination as written in the document
/// * `base` - The base URL for resolution, if configured
///
/// # Returns
/// * The resolved URL, or `url_str` unchanged when there is no base, the
///   reference is empty or already has a scheme, or resolution fails
///
/// # Examples
///
/// ```
/// use rs_mdchunks::url_utils::resolve_image_url;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/docs/guide.md").unwrap();
/// assert_eq!(
///     resolve_image_url("img/diagram.png", Some(&base)),
///     "https://example.com/docs/img/diagram.png"
/// );
/// assert_eq!(resolve_image_url("img/diagram.png", None), "img/diagram.png");
/// ```
#[must_use]
pub fn resolve_image_url(url_str: &str, base: Option<&Url>) -> String {
    let Some(base) = base else {
        return url_str.to_string();
    };

    if url_str.is_empty() || has_scheme(url_str) {
        return url_str.to_string();
    }

    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}
