//! Node tree structures for parsed SVG markup

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Discriminant for the kinds of constructs a document may contain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// Markup element (`<svg>`, `<path>`, ...)
    #[default]
    Element,
    /// Character data between tags
    Text,
    /// `<![CDATA[...]]>` section
    Cdata,
    /// `<!-- ... -->` comment
    Comment,
    /// `<?target data?>` processing instruction
    Instruction,
    /// `<!DOCTYPE ...>` declaration
    Doctype,
}

/// Ordered attribute map; insertion order is document order
pub type AttrMap = IndexMap<String, String>;

/// One node of the parsed markup tree
///
/// Elements carry `attributes` and `children` and have no `value`.
/// Text-like nodes (text, CDATA, comment, instruction, doctype) carry their
/// decoded content in `value` and have no children. The distinction is
/// preserved in the JSON shape: `value` is omitted for elements rather than
/// serialized as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Tag name; empty for non-element nodes
    pub name: String,

    /// Node kind, serialized as the `type` field in lowercase
    #[serde(rename = "type")]
    pub node_type: NodeType,

    /// Attributes in document order; keys unique per node
    pub attributes: AttrMap,

    /// Child nodes in document order
    pub children: Vec<Node>,

    /// Content payload for non-element nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Node {
    /// Create an element node with the given tag name and attributes
    #[inline]
    #[must_use = "creates element node"]
    pub fn element(name: impl Into<String>, attributes: AttrMap) -> Self {
        Self {
            name: name.into(),
            node_type: NodeType::Element,
            attributes,
            children: Vec::new(),
            value: None,
        }
    }

    /// Create a text-like leaf node of the given kind
    #[inline]
    #[must_use = "creates leaf node"]
    pub fn leaf(node_type: NodeType, value: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            node_type,
            attributes: AttrMap::new(),
            children: Vec::new(),
            value: Some(value.into()),
        }
    }

    /// True if this node is an element
    #[inline]
    #[must_use]
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }
}
