//! Character encoding detection and transcoding.
//!
//! Markdown has no in-band charset declaration, so detection relies on a
//! byte order mark, then UTF-8 validity, then a caller-supplied fallback label.

use encoding_rs::{Encoding, UTF_8};

/// Detect the character encoding of Markdown bytes.
///
/// Checks in the following order:
/// 1. A UTF-8, UTF-16LE or UTF-16BE byte order mark
/// 2. Valid UTF-8
/// 3. The `fallback` label, if it names a known encoding
/// 4. Defaults to UTF-8
///
/// Returns the encoding and the length of the BOM to skip.
#[must_use]
pub fn detect_encoding(bytes: &[u8], fallback: Option<&str>) -> (&'static Encoding, usize) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return (encoding, bom_len);
    }

    if std::str::from_utf8(bytes).is_ok() {
        return (UTF_8, 0);
    }

    if let Some(encoding) = fallback.and_then(|label| Encoding::for_label(label.trim().as_bytes())) {
        return (encoding, 0);
    }

    (UTF_8, 0)
}

/// Transcode Markdown bytes to a UTF-8 string.
///
/// Detects the encoding and converts to UTF-8, using lossy conversion
/// to handle invalid characters gracefully (replacing them with �).
///
/// # Examples
///
/// ```
/// use rs_mdchunks::encoding::transcode_to_utf8;
///
/// let utf8_str = transcode_to_utf8(b"# Hello, World!", None);
/// assert_eq!(utf8_str, "# Hello, World!");
///
/// let latin = transcode_to_utf8(b"Caf\xE9", Some("windows-1252"));
/// assert_eq!(latin, "Café");
/// ```
#[must_use]
pub fn transcode_to_utf8(bytes: &[u8], fallback: Option<&str>) -> String {
    let (encoding, bom_len) = detect_encoding(bytes, fallback);
    let body = &bytes[bom_len..];

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "replaced undecodable bytes");
    }
    decoded.into_owned()
}
