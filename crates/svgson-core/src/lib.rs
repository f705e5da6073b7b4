//! SVG markup to JSON-serializable AST conversion
//!
//! This crate turns SVG markup (a constrained XML dialect) into a typed,
//! serializable node tree, and batch-converts collections of documents with
//! merged or per-document output.
//!
//! ## Supported Features
//!
//! - **Parsing** - single-pass tokenizer/tree-builder over an explicit stack;
//!   elements, text, CDATA, comments, processing instructions, doctypes
//! - **Attribute normalization** - optional camelCase rewriting of attribute
//!   names (`stroke-width` → `strokeWidth`)
//! - **Batch aggregation** - merged (one concatenated parse) or separated
//!   (independent per-item parses, parallelized, order-preserving)
//! - **JSON output** - stable wire shape with document-ordered attributes
//!
//! ## Examples
//!
//! Parse a document:
//!
//! ```rust
//! use svgson_core::{parse, ParseOptions};
//!
//! let node = parse(r#"<svg width="10"><path d="M0 0"/></svg>"#, &ParseOptions::default())?;
//! assert_eq!(node.name, "svg");
//! assert_eq!(node.children[0].name, "path");
//! # Ok::<(), svgson_core::SvgsonError>(())
//! ```
//!
//! Batch-convert with per-item results:
//!
//! ```rust
//! use svgson_core::{aggregate_separated, BatchItem, ParseOptions};
//!
//! let items = vec![
//!     BatchItem::new("icon", "<svg/>"),
//!     BatchItem::new("shape", "<rect/>"),
//! ];
//! let outcomes = aggregate_separated(&items, &ParseOptions::default());
//! assert_eq!(outcomes.len(), 2);
//! ```

pub mod attrs;
pub mod batch;
pub mod error;
pub mod node;
pub mod parser;
pub mod serializer;

// Re-export main types
pub use attrs::camelize;
pub use batch::{
    aggregate, aggregate_merged, aggregate_separated, AggregateMode, Aggregated, BatchItem,
    ItemOutcome,
};
pub use error::{Result, SvgsonError};
pub use node::{AttrMap, Node, NodeType};
pub use parser::{parse, ParseOptions, SYNTHETIC_ROOT_NAME};
pub use serializer::{JsonOptions, JsonSerializer};
