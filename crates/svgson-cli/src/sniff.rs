//! SVG sniffing
//!
//! Cheap yes/no predicate on raw text, used to reject non-SVG input before
//! parsing and to tell inline markup apart from file paths.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches an optional prolog (XML declaration, doctype, comments) followed
/// by an `<svg>` root tag.
static SVG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)^\s*(?:<\?xml[^>]*\?>\s*)?(?:<!doctype\s+svg[^>]*>\s*)?(?:<!--.*?-->\s*)*<svg[\s>/]",
    )
    .expect("pattern is compile-time constant")
});

/// True if the text looks like an SVG document
#[must_use]
pub fn is_svg(text: &str) -> bool {
    let text = text.trim_start_matches('\u{feff}');
    SVG_PATTERN.is_match(text)
}
