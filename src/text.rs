// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 trendwatch contributors

//! Helpful utilities for working with text.

use htmlentity::entity::{self, ICodedDataTrait};

/// Converts HTML entities into their single-character equivalents.
///
/// For example, Reddit returns "&" as "&amp;", ">" as "&gt;",
/// and "<" as "&lt;"; this function will convert those HTML
/// entities into single, human-readable characters.
///
/// Leading and trailing whitespace will also be trimmed from the string.
///
/// # Examples
///
/// ```
/// use trendwatch::text::convert_html_entities;
/// let raw = "  BPC-157 &amp; TB-500: dosing &lt;notes&gt;  ";
/// let converted = convert_html_entities(raw);
/// assert_eq!(converted, "BPC-157 & TB-500: dosing <notes>");
/// ```
///
/// ```
/// use trendwatch::text::convert_html_entities;
/// let raw = "";
/// let converted = convert_html_entities(raw);
/// assert_eq!(converted, raw);
/// ```
pub fn convert_html_entities(text: &str) -> String {
    let text = text.trim();
    entity::decode(text.as_bytes())
        .to_string()
        .unwrap_or(text.to_string())
}

/// Returns at most the first `max_chars` characters of `text`.
///
/// Truncation counts characters, not bytes, so a multi-byte character is
/// never split.
///
/// # Examples
///
/// ```
/// use trendwatch::text::truncate;
/// assert_eq!(truncate("peptides", 4), "pept");
/// assert_eq!(truncate("naïve", 3), "naï");
/// assert_eq!(truncate("short", 50), "short");
/// ```
pub fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
