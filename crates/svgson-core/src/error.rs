//! Error types for svgson-core

use std::io;
use thiserror::Error;

/// Errors produced while parsing or serializing SVG markup
#[derive(Error, Debug)]
pub enum SvgsonError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input is not well-formed markup
    #[error("malformed markup at byte {position}: {message}")]
    MalformedMarkup {
        /// Byte offset into the input where the problem was detected
        position: usize,
        /// Expected-vs-found description of the problem
        message: String,
    },

    /// Input was empty or whitespace-only where a document was required
    #[error("input is empty or whitespace-only")]
    EmptyInput,

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SvgsonError {
    /// Construct a malformed-markup error at the given byte offset
    #[inline]
    pub fn malformed(position: usize, message: impl Into<String>) -> Self {
        Self::MalformedMarkup {
            position,
            message: message.into(),
        }
    }
}

/// Result type for svgson operations
pub type Result<T> = std::result::Result<T, SvgsonError>;
