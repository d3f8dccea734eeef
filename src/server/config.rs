//! Server configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Size of the single read performed on each connection.
pub const DEFAULT_READ_BUFFER_SIZE: usize = 4096;

/// Deadline applied to each connection unless overridden.
pub const DEFAULT_IO_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host name or address to bind to.
    pub host: String,
    /// Port to bind to. `0` lets the OS pick one.
    pub port: u16,
    /// Directory beneath which every served file must reside.
    pub document_root: PathBuf,
    /// The read buffer size. Requests longer than one read are not supported.
    pub read_buffer_size: usize,
    /// Deadline for a whole connection, `None` to wait forever.
    pub io_timeout: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8080,
            document_root: PathBuf::from("www"),
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
            io_timeout: Some(DEFAULT_IO_TIMEOUT),
        }
    }
}

impl ServerConfig {
    /// Set the host to bind to.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port to bind to.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the document root.
    pub fn with_document_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.document_root = root.into();
        self
    }

    /// Set the per-connection deadline.
    pub fn with_io_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.io_timeout = timeout;
        self
    }

    /// `host:port` as given, suitable for name resolution.
    pub fn bind_target(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
