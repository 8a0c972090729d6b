//! Compiled regex patterns for chunk post-processing.
//!
//! All patterns are compiled once at first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches a run of one or more whitespace characters, including the line
/// breaks that soft-wrapped paragraphs carry.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Matches a URL scheme prefix (`https:`, `mailto:`, `data:` ...).
pub static URL_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("URL_SCHEME regex"));
