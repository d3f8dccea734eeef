//! HTTP response types and wire serialization.

use std::time::SystemTime;

/// Value of the `Server` header.
pub const SERVER_NAME: &str = concat!("microhttp-static/", env!("CARGO_PKG_VERSION"));

/// Content type used when none is given.
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";

/// Body of every 404 response.
pub const NOT_FOUND_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>404 - Page not found</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            text-align: center;
            padding: 50px;
            background-color: #f5f5f5;
        }
        h1 {
            color: #e74c3c;
        }
        .container {
            max-width: 600px;
            margin: 0 auto;
            background-color: white;
            padding: 30px;
            border-radius: 5px;
            box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);
        }
        a {
            color: #3498db;
            text-decoration: none;
        }
        a:hover {
            text-decoration: underline;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>404 - Page not found</h1>
        <p>The page you are looking for does not exist or has been moved.</p>
        <p><a href="/">Back to the home page</a></p>
    </div>
</body>
</html>
"#;

/// HTTP status codes this server sends, with their reason phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    BadRequest = 400,
    NotFound = 404,
    MethodNotAllowed = 405,
}

impl StatusCode {
    /// Get the numeric code.
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Get the reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

/// Represents an HTTP response.
///
/// The header block is not stored: it is derived from the status, content type and
/// body when the response is serialized, so `Content-Length` always matches the body
/// and `Date` reflects the moment of sending.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code
    pub status: StatusCode,
    /// Value of the `Content-Type` header
    pub content_type: String,
    /// The response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a new HTTP response with an empty `text/html` body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            body: Vec::new(),
        }
    }

    /// The fixed 404 page.
    pub fn not_found() -> Self {
        Self::new(StatusCode::NotFound).with_body_string(NOT_FOUND_PAGE)
    }

    /// Set the response body with a string.
    pub fn with_body_string(self, body: impl Into<String>) -> Self {
        self.with_body_bytes(body.into().into_bytes())
    }

    /// Set the response body with bytes.
    pub fn with_body_bytes(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// The header block in wire order, dated `date`.
    pub fn headers_at(&self, date: SystemTime) -> Vec<(&'static str, String)> {
        vec![
            ("Date", httpdate::fmt_http_date(date)),
            ("Server", SERVER_NAME.to_string()),
            ("Content-Type", self.content_type.clone()),
            ("Content-Length", self.body.len().to_string()),
            ("Connection", "close".to_string()),
        ]
    }

    /// Convert the response to bytes, dated `date`.
    pub fn to_bytes_at(&self, date: SystemTime) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(256 + self.body.len());

        // Add the status line
        let status_line = format!("HTTP/1.1 {} {}\r\n", self.status.as_u16(), self.status.reason_phrase());
        bytes.extend_from_slice(status_line.as_bytes());

        // Add the headers
        for (name, value) in self.headers_at(date) {
            let header_line = format!("{name}: {value}\r\n");
            bytes.extend_from_slice(header_line.as_bytes());
        }

        // Add the empty line that separates headers from body
        bytes.extend_from_slice(b"\r\n");

        // Add the body
        bytes.extend_from_slice(&self.body);

        bytes
    }

    /// Convert the response to bytes, dated now.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_bytes_at(SystemTime::now())
    }
}
