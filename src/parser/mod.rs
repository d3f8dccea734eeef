//! HTTP request-line parser.
//!
//! Only the first line of a request is interpreted. Header lines may be present in
//! the received bytes but are never parsed.

mod request;
mod method;
mod error;
mod tests;

// Re-export public items
pub use request::HttpRequest;
pub use method::Method;
pub use error::Error;

// Re-export the parsing functions
pub use request::{parse_request, request_line};
