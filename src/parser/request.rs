//! HTTP request-line parsing and representation.

use crate::parser::error::Error;
use crate::parser::method::Method;

/// Represents the request line of an HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request target exactly as sent
    pub path: String,
    /// The protocol version token exactly as sent
    pub version: String,
}

impl HttpRequest {
    /// Create a new HTTP request.
    pub fn new(method: Method, path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            version: version.into(),
        }
    }

    /// The request path without its query string or fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// use microhttp_static::{HttpRequest, Method};
    ///
    /// let req = HttpRequest::new(Method::GET, "/search.html?q=rust#top", "HTTP/1.1");
    /// assert_eq!(req.target(), "/search.html");
    /// ```
    pub fn target(&self) -> &str {
        let end = self
            .path
            .find(['?', '#'])
            .unwrap_or(self.path.len());
        &self.path[..end]
    }
}

/// Extract the request line from raw bytes.
///
/// The input is split on `\n` and the first line is returned with surrounding
/// whitespace (including a trailing `\r`) removed.
///
/// # Returns
///
/// The trimmed first line, or an error if the input is empty or the line is not UTF-8
pub fn request_line(input: &[u8]) -> Result<&str, Error> {
    if input.is_empty() {
        return Err(Error::EmptyRequest);
    }

    let end = input
        .iter()
        .position(|&b| b == b'\n')
        .unwrap_or(input.len());

    std::str::from_utf8(&input[..end])
        .map(str::trim)
        .map_err(|_| Error::InvalidEncoding)
}

/// Parse the request line of an HTTP request from a byte slice.
///
/// Only the first line is interpreted; anything after it is ignored. The line must
/// split on whitespace into exactly three tokens: method, path and version.
///
/// # Arguments
///
/// * `input` - A byte slice containing the bytes received from the client
///
/// # Returns
///
/// The parsed request, or an error if the request line is invalid
pub fn parse_request(input: &[u8]) -> Result<HttpRequest, Error> {
    let line = request_line(input)?;

    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
        (Some(method), Some(path), Some(version), None) => {
            Ok(HttpRequest::new(Method::from(method), path, version))
        }
        _ => Err(Error::MalformedRequestLine(line.to_string())),
    }
}
