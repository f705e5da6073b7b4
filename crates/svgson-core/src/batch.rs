//! Batch aggregation over multiple markup documents
//!
//! Two policies: `Merged` concatenates the raw texts in input order and runs
//! one parse over the blob (multi-root input lands under the parser's
//! synthetic `root` wrapper); `Separated` parses every item independently and
//! reports per-item failures alongside successes without aborting the batch.

use crate::error::Result;
use crate::node::Node;
use crate::parser::{parse, ParseOptions};
use rayon::prelude::*;

/// One unit of batch input
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BatchItem {
    /// Caller-supplied identifier (typically a file stem)
    pub id: String,
    /// Raw markup text
    pub text: String,
}

impl BatchItem {
    /// Create a batch item
    #[inline]
    #[must_use = "creates batch item"]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// How a batch of documents is combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateMode {
    /// Concatenate all inputs into one parse unit
    Merged,
    /// Parse each input independently, one result per item
    Separated,
}

/// Per-item outcome in separated mode
#[derive(Debug)]
pub struct ItemOutcome {
    /// Identifier of the input item
    pub id: String,
    /// Parsed tree, or the per-item parse failure
    pub result: Result<Node>,
}

/// Result of [`aggregate`]
#[derive(Debug)]
pub enum Aggregated {
    /// One tree for the whole batch; `None` when the batch was empty
    Merged(Option<Node>),
    /// One outcome per input item, in input order
    Separated(Vec<ItemOutcome>),
}

/// Aggregate a batch of markup documents
///
/// # Errors
///
/// In merged mode, a parse failure on the concatenated text fails the whole
/// call. Separated mode never fails; per-item errors are carried in the
/// returned outcomes.
#[must_use = "aggregation produces a result that should be handled"]
pub fn aggregate(
    items: &[BatchItem],
    mode: AggregateMode,
    options: &ParseOptions,
) -> Result<Aggregated> {
    match mode {
        AggregateMode::Merged => Ok(Aggregated::Merged(aggregate_merged(items, options)?)),
        AggregateMode::Separated => Ok(Aggregated::Separated(aggregate_separated(items, options))),
    }
}

/// Concatenate all item texts in input order and parse once
///
/// Returns `None` for an empty batch. Concatenation is pure text joining with
/// no separator; the parser's synthetic-wrapper policy handles the resulting
/// multi-root blob.
///
/// # Errors
///
/// Returns the parse error for the concatenated text.
#[must_use = "aggregation produces a result that should be handled"]
pub fn aggregate_merged(items: &[BatchItem], options: &ParseOptions) -> Result<Option<Node>> {
    if items.is_empty() {
        return Ok(None);
    }
    let blob: String = items.iter().map(|item| item.text.as_str()).collect();
    log::debug!("merged parse over {} documents ({} bytes)", items.len(), blob.len());
    parse(&blob, options).map(Some)
}

/// Parse every item independently, returning one outcome per item
///
/// Items are parsed in parallel; the returned order always matches input
/// order. A failing item does not suppress the others.
#[must_use = "aggregation produces outcomes that should be handled"]
pub fn aggregate_separated(items: &[BatchItem], options: &ParseOptions) -> Vec<ItemOutcome> {
    items
        .par_iter()
        .map(|item| ItemOutcome {
            id: item.id.clone(),
            result: parse(&item.text, options),
        })
        .collect()
}
