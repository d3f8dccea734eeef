//! Static file server.
//!
//! The listener accepts connections and hands each one to its own task, which reads
//! a single request, answers it and closes the socket.

mod response;
mod config;
mod error;
mod resolver;
mod handler;
mod http_server;

// Re-export public items
pub use response::{HttpResponse, StatusCode, NOT_FOUND_PAGE, SERVER_NAME};
pub use config::ServerConfig;
pub use error::Error;
pub use resolver::{content_type_for, PathResolver};
pub use handler::handle_connection;
pub use http_server::{Accept, HttpServer};
