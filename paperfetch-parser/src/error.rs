use std::result;

use thiserror::Error;

/// Error types for MEDLINE parsing operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A non-blank line is neither a `TAG - value` field line nor a continuation line
    #[error("Malformed MEDLINE line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    /// A continuation line appeared before any field was opened
    #[error("Continuation line {line} has no preceding field")]
    OrphanContinuation { line: usize },
}

pub type Result<T> = result::Result<T, ParseError>;
