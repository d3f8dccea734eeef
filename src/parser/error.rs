//! Error types for the HTTP parser.

use thiserror::Error;

/// Errors that can occur while parsing a request line.
#[derive(Debug, Error)]
pub enum Error {
    /// The request line does not consist of exactly method, path and version.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The request line is not valid UTF-8.
    #[error("Request line is not valid UTF-8")]
    InvalidEncoding,

    /// The request is empty.
    #[error("Empty request")]
    EmptyRequest,
}
