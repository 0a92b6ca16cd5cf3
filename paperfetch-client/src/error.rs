use std::result;

use paperfetch_parser::ParseError;
use thiserror::Error;

/// Error types for paperfetch client operations
#[derive(Error, Debug)]
pub enum PaperFetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// MEDLINE payload could not be parsed
    #[error("MEDLINE parsing failed: {0}")]
    ParseError(#[from] ParseError),

    /// Invalid PMID format
    #[error("Invalid PMID format: {pmid}")]
    InvalidPmid { pmid: String },

    /// Generic API error with HTTP status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Search limit exceeded
    #[error("Search limit exceeded: requested {requested}, maximum is {maximum}")]
    SearchLimitExceeded { requested: usize, maximum: usize },
}

pub type Result<T> = result::Result<T, PaperFetchError>;
