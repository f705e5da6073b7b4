//! SVG markup parser
//!
//! Tokenizes markup with quick-xml and builds the node tree in a single pass
//! over the event stream. Tree construction runs on an explicit stack of
//! in-progress nodes rather than recursion, so malformed input is rejected by
//! inspecting bounded state instead of unwinding the call stack.

use crate::attrs::camelize;
use crate::error::{Result, SvgsonError};
use crate::node::{AttrMap, Node, NodeType};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parser options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    /// Normalize attribute names to camelCase (`stroke-width` → `strokeWidth`)
    pub camelcase: bool,
}

/// Synthetic wrapper element name used when the input holds more than one
/// top-level element (see [`parse`]).
pub const SYNTHETIC_ROOT_NAME: &str = "root";

/// Parse SVG markup into a node tree
///
/// Returns the single root element of the document. Input holding several
/// back-to-back top-level elements (batch-merged documents) yields a
/// synthetic element named `root` wrapping them in document order; this is
/// the documented policy for multi-root input, not an error. Prolog
/// constructs outside the root (XML declaration, doctype, comments) are
/// skipped.
///
/// # Errors
///
/// Returns an error if:
/// - The input is empty or whitespace-only (`SvgsonError::EmptyInput`)
/// - The markup is not well-formed: unclosed or mismatched tags, invalid
///   entity references, truncated input (`SvgsonError::MalformedMarkup`)
#[must_use = "parsing produces a result that should be handled"]
pub fn parse(text: &str, options: &ParseOptions) -> Result<Node> {
    if text.trim().is_empty() {
        return Err(SvgsonError::EmptyInput);
    }

    let mut reader = Reader::from_str(text);
    reader.trim_text(true);
    // Close-tag matching is done on our own stack so the error can name
    // both sides of the mismatch.
    reader.check_end_names(false);
    let mut buf = Vec::new();

    // In-progress elements, root-first
    let mut stack: Vec<Node> = Vec::new();
    // Finished top-level nodes
    let mut top_level: Vec<Node> = Vec::new();

    loop {
        let position = reader.buffer_position();
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let node = element_from_event(&e, options, position)?;
                stack.push(node);
            }
            Ok(Event::Empty(e)) => {
                let node = element_from_event(&e, options, position)?;
                attach(&mut stack, &mut top_level, node);
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                let Some(node) = stack.pop() else {
                    return Err(SvgsonError::malformed(
                        position,
                        format!("unexpected closing tag </{name}> with no open element"),
                    ));
                };
                if node.name != name {
                    return Err(SvgsonError::malformed(
                        position,
                        format!("mismatched closing tag: expected </{}>, found </{name}>", node.name),
                    ));
                }
                attach(&mut stack, &mut top_level, node);
            }
            Ok(Event::Text(e)) => {
                let value = e
                    .unescape()
                    .map_err(|err| {
                        SvgsonError::malformed(position, format!("invalid character reference: {err}"))
                    })?
                    .to_string();
                if !value.is_empty() {
                    attach(&mut stack, &mut top_level, Node::leaf(NodeType::Text, value));
                }
            }
            Ok(Event::CData(e)) => {
                let value = String::from_utf8_lossy(&e.into_inner()).to_string();
                attach(&mut stack, &mut top_level, Node::leaf(NodeType::Cdata, value));
            }
            Ok(Event::Comment(e)) => {
                let value = String::from_utf8_lossy(&e).to_string();
                attach(&mut stack, &mut top_level, Node::leaf(NodeType::Comment, value));
            }
            Ok(Event::PI(e)) => {
                let value = String::from_utf8_lossy(&e).to_string();
                attach(
                    &mut stack,
                    &mut top_level,
                    Node::leaf(NodeType::Instruction, value),
                );
            }
            Ok(Event::DocType(e)) => {
                let value = String::from_utf8_lossy(&e).trim().to_string();
                attach(&mut stack, &mut top_level, Node::leaf(NodeType::Doctype, value));
            }
            // XML declaration carries no document content
            Ok(Event::Decl(_)) => {}
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(SvgsonError::malformed(
                    position,
                    format!("XML parse error: {err}"),
                ));
            }
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(SvgsonError::malformed(
            reader.buffer_position(),
            format!("unclosed element <{}>", open.name),
        ));
    }

    finish_top_level(top_level, reader.buffer_position())
}

/// Build an element node from a start/empty tag event
fn element_from_event(
    e: &BytesStart<'_>,
    options: &ParseOptions,
    position: usize,
) -> Result<Node> {
    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
    let mut attrs = AttrMap::new();
    // Duplicate keys are ours to resolve (last value wins), not a parse error
    for attr in e.attributes().with_checks(false) {
        let attr = attr.map_err(|err| {
            SvgsonError::malformed(position, format!("invalid attribute in <{name}>: {err}"))
        })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let key = if options.camelcase { camelize(&key) } else { key };
        let value = attr
            .unescape_value()
            .map_err(|err| {
                SvgsonError::malformed(
                    position,
                    format!("invalid character reference in <{name}>: {err}"),
                )
            })?
            .to_string();
        // Repeated keys keep their first position, last value wins
        attrs.insert(key, value);
    }
    Ok(Node::element(name, attrs))
}

/// Attach a finished node to the innermost open element, or record it at top
/// level. Non-element constructs outside the root (prolog comments, doctype)
/// are dropped.
fn attach(stack: &mut Vec<Node>, top_level: &mut Vec<Node>, node: Node) {
    if let Some(top) = stack.last_mut() {
        top.children.push(node);
    } else if node.is_element() {
        top_level.push(node);
    } else {
        log::debug!("dropping top-level {:?} node outside root", node.node_type);
    }
}

/// Resolve the finished top-level elements into a single root
fn finish_top_level(mut top_level: Vec<Node>, position: usize) -> Result<Node> {
    match top_level.len() {
        0 => Err(SvgsonError::malformed(position, "no root element found")),
        1 => Ok(top_level.remove(0)),
        n => {
            log::debug!("wrapping {n} top-level elements in synthetic <{SYNTHETIC_ROOT_NAME}>");
            let mut root = Node::element(SYNTHETIC_ROOT_NAME, AttrMap::new());
            root.children = top_level;
            Ok(root)
        }
    }
}
