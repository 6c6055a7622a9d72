//! Lightweight "looks like SVG" check used before submitting a conversion.

use roxmltree::{Document, ParsingOptions};

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

/// Parse options shared by every SVG reader in the workspace. Exported
/// editor files routinely carry a doctype, so DTDs are allowed.
#[must_use]
pub fn parsing_options() -> ParsingOptions {
    ParsingOptions { allow_dtd: true, ..ParsingOptions::default() }
}

/// Return `true` when `text` is well-formed XML whose root element is `<svg>`.
///
/// Leading and trailing whitespace is ignored; empty input is never SVG.
#[must_use]
pub fn is_svg(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }
    Document::parse_with_options(text, parsing_options())
        .map_or(false, |doc| doc.root_element().tag_name().name() == "svg")
}
