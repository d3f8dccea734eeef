//! A minimal concurrent HTTP/1.1 static file server.
//!
//! The server accepts plain TCP connections, reads a single request, answers `GET`
//! requests with the bytes of a file beneath a document root and closes the
//! connection.
//!
//! # Features
//!
//! - One task per connection; a slow client never stalls the accept loop
//! - Request-line parsing from raw bytes, with `400 Bad Request` for anything else
//! - `405 Method Not Allowed` for every method other than `GET`
//! - Path canonicalization with a document-root containment check
//! - Content types guessed from file extensions
//! - A fixed HTML page for `404 Not Found`
//! - Every response carries `Date`, `Content-Length` and `Connection: close`
//!
//! # Limitations
//!
//! Each connection is read once, into a buffer of
//! [`ServerConfig::read_buffer_size`] bytes (4096 by default). Anything the client
//! sends beyond that is ignored, and a request line that does not fit is rejected
//! with `400 Bad Request`.
//!
//! # Examples
//!
//! ## Parsing a request line
//!
//! ```
//! use microhttp_static::{parse_request, Method};
//!
//! let request = parse_request(b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n").unwrap();
//! assert_eq!(request.method, Method::GET);
//! assert_eq!(request.path, "/index.html");
//! assert_eq!(request.version, "HTTP/1.1");
//! ```
//!
//! ## Framing a response
//!
//! ```
//! use microhttp_static::{HttpResponse, StatusCode};
//!
//! let response = HttpResponse::new(StatusCode::Ok)
//!     .with_content_type("text/plain")
//!     .with_body_string("hello");
//! let wire = String::from_utf8(response.to_bytes()).unwrap();
//! assert!(wire.starts_with("HTTP/1.1 200 OK\r\nDate: "));
//! assert!(wire.ends_with("Content-Length: 5\r\nConnection: close\r\n\r\nhello"));
//! ```
//!
//! ## Running the server
//!
//! ```no_run
//! use microhttp_static::{HttpServer, ServerConfig};
//!
//! # async fn run() -> Result<(), microhttp_static::ServerError> {
//! let config = ServerConfig::default()
//!     .with_port(8080)
//!     .with_document_root("www");
//! HttpServer::new(config).start().await
//! # }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Export the logging setup
pub mod logging;

// Re-export commonly used items for convenience
pub use parser::{Error as ParserError, HttpRequest, Method, parse_request};
pub use server::{Error as ServerError, HttpResponse, HttpServer, PathResolver, ServerConfig, StatusCode};
pub use logging::LogConfig;
