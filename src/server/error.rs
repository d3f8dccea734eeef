//! Error types for the HTTP server.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::parser::{Error as ParserError, Method};
use crate::server::response::StatusCode;

/// Errors that can occur during HTTP server operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The request line could not be parsed.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    /// Any method other than GET.
    #[error("Method {0} not allowed")]
    UnsupportedMethod(Method),

    /// Requested file does not exist or is not a regular file.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Requested path resolves outside the document root.
    #[error("Path escapes the document root: {0}")]
    Forbidden(String),

    /// I/O error on a socket or the filesystem.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The connection did not complete within its deadline.
    #[error("Connection timed out after {0:?}")]
    Timeout(Duration),

    /// The listening socket could not be created or bound.
    #[error("Failed to bind {addr}: {source}")]
    BindError {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The log file could not be opened.
    #[error("Failed to open log file {path}: {source}")]
    Logging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// The status a client receives for this error, if a response is sent at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::ParseError(_) => Some(StatusCode::BadRequest),
            Error::UnsupportedMethod(_) => Some(StatusCode::MethodNotAllowed),
            Error::NotFound(_) | Error::Forbidden(_) => Some(StatusCode::NotFound),
            _ => None,
        }
    }
}
