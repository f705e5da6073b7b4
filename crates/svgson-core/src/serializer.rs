//! JSON serialization for node trees
//!
//! `Node` already implements `Serialize`; this is a convenience wrapper with
//! formatting options. Attribute order in the emitted JSON object matches the
//! source document's attribute order.

use crate::error::Result;
use crate::node::Node;
use serde::ser::Error as _;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

/// Options for JSON serialization
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JsonOptions {
    /// Pretty-print with indentation (default: false)
    pub pretty: bool,
    /// Indentation string when pretty=true (default: 4 spaces)
    pub indent: String,
}

impl Default for JsonOptions {
    #[inline]
    fn default() -> Self {
        Self {
            pretty: false,
            indent: "    ".to_string(),
        }
    }
}

/// JSON serializer for node trees
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonSerializer {
    options: JsonOptions,
}

impl JsonSerializer {
    /// Create a serializer with default options (compact output)
    #[inline]
    #[must_use = "creates serializer with default options"]
    pub fn new() -> Self {
        Self {
            options: JsonOptions::default(),
        }
    }

    /// Create a serializer with custom options
    #[inline]
    #[must_use = "creates serializer with custom options"]
    pub const fn with_options(options: JsonOptions) -> Self {
        Self { options }
    }

    /// Serialize a node tree to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    #[must_use = "this function returns serialized JSON that should be used"]
    pub fn serialize_node(&self, node: &Node) -> Result<String> {
        if self.options.pretty {
            let mut out = Vec::new();
            let formatter = PrettyFormatter::with_indent(self.options.indent.as_bytes());
            let mut ser = Serializer::with_formatter(&mut out, formatter);
            serde::Serialize::serialize(node, &mut ser)?;
            Ok(String::from_utf8(out).map_err(serde_json::Error::custom)?)
        } else {
            Ok(serde_json::to_string(node)?)
        }
    }
}
