//! Attribute-name normalization
//!
//! Rewrites hyphenated and namespace-prefixed attribute names into camelCase
//! identifiers (`stroke-width` → `strokeWidth`, `xlink:href` → `xlinkHref`).
//! The mapping is a pure function of the source key; two distinct source keys
//! that collapse onto the same normalized key resolve last-value-wins inside
//! the node's attribute map.

/// Normalize an attribute name to camelCase
///
/// Hyphens and namespace colons are removed and the letter following each
/// separator is uppercased. Keys with no separators pass through unchanged.
#[must_use = "returns the normalized key"]
pub fn camelize(key: &str) -> String {
    if !key.contains(['-', ':']) {
        return key.to_string();
    }

    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '-' || ch == ':' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
