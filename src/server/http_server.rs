//! HTTP server implementation.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use log::{error, info, warn};
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio::signal;
use tokio::task::JoinHandle;

use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::handler::handle_connection;
use crate::server::resolver::PathResolver;

/// Pending-connection queue length passed to `listen(2)`.
const LISTEN_BACKLOG: u32 = 128;

/// A source of accepted connections.
pub trait Accept {
    /// Wait for the next connection.
    fn accept(&self) -> impl Future<Output = io::Result<(TcpStream, SocketAddr)>> + Send;
}

impl Accept for TcpListener {
    fn accept(&self) -> impl Future<Output = io::Result<(TcpStream, SocketAddr)>> + Send {
        TcpListener::accept(self)
    }
}

/// A static file HTTP server.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Create the document root if it is missing and build its resolver.
    pub async fn prepare_document_root(&self) -> Result<PathResolver, Error> {
        let root = &self.config.document_root;
        if !tokio::fs::try_exists(root).await? {
            tokio::fs::create_dir_all(root).await?;
            info!("Created directory {root}", root = root.display());
        }
        PathResolver::new(root).await
    }

    /// Set up the TCP listener with address reuse enabled.
    ///
    /// When the host resolves to several addresses an IPv4 one is preferred.
    pub async fn bind(&self) -> Result<TcpListener, Error> {
        let target = self.config.bind_target();
        let bind_error = |source: io::Error| Error::BindError {
            addr: target.clone(),
            source,
        };

        let addrs: Vec<SocketAddr> = tokio::net::lookup_host(&target)
            .await
            .map_err(bind_error)?
            .collect();
        let addr = addrs
            .iter()
            .find(|addr| addr.is_ipv4())
            .or_else(|| addrs.first())
            .copied()
            .ok_or_else(|| {
                bind_error(io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    "host did not resolve to any address",
                ))
            })?;

        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()
        } else {
            TcpSocket::new_v6()
        }
        .map_err(bind_error)?;
        socket.set_reuseaddr(true).map_err(bind_error)?;
        socket.bind(addr).map_err(bind_error)?;
        let listener = socket.listen(LISTEN_BACKLOG).map_err(bind_error)?;

        let port = listener.local_addr().map_err(bind_error)?.port();
        info!("Server listening on http://{host}:{port}", host = self.config.host);
        Ok(listener)
    }

    /// Start the server and serve until Ctrl+C or SIGTERM.
    pub async fn start(&self) -> Result<(), Error> {
        let resolver = self.prepare_document_root().await?;
        let listener = self.bind().await?;
        self.serve(listener, resolver, shutdown_signal()).await
    }

    /// Accept connections on `listener` until `shutdown` completes.
    ///
    /// Every accepted connection runs in its own detached task; in-flight
    /// connections are not waited for when the loop ends. An accept failure ends the
    /// loop and is returned.
    pub async fn serve(
        &self,
        listener: impl Accept,
        resolver: PathResolver,
        shutdown: impl Future<Output = ()>,
    ) -> Result<(), Error> {
        let resolver = Arc::new(resolver);
        let config = Arc::new(self.config.clone());
        tokio::pin!(shutdown);

        let result = loop {
            tokio::select! {
                // Check for shutdown signal
                _ = &mut shutdown => {
                    info!("Shutting down server...");
                    break Ok(());
                }

                // Accept new connections
                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, addr)) => {
                            Self::dispatch(socket, addr, resolver.clone(), config.clone());
                        }
                        Err(e) => {
                            error!("Error accepting connection: {e}");
                            break Err(Error::IoError(e));
                        }
                    }
                }
            }
        };

        drop(listener);
        info!("Server closed");
        result
    }

    /// Hand a connection to its own task without waiting for it.
    fn dispatch(socket: TcpStream, peer: SocketAddr, resolver: Arc<PathResolver>, config: Arc<ServerConfig>) {
        spawn_contained(peer, Self::serve_connection(socket, peer, resolver, config));
    }

    /// Run one connection to completion and close it.
    async fn serve_connection(
        mut socket: TcpStream,
        peer: SocketAddr,
        resolver: Arc<PathResolver>,
        config: Arc<ServerConfig>,
    ) {
        match handle_connection(&mut socket, peer, &resolver, &config).await {
            Ok(_) => {}
            Err(e @ Error::Timeout(_)) => warn!("{peer} - {e}"),
            Err(e) => error!("Error handling request from {peer}: {e}"),
        }

        let _ = socket.shutdown().await;
    }
}

/// Spawn a connection task whose panic is logged instead of propagated.
///
/// Unwinding drops the task's state, the socket included.
pub(crate) fn spawn_contained(
    peer: SocketAddr,
    connection: impl Future<Output = ()> + Send + 'static,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if AssertUnwindSafe(connection).catch_unwind().await.is_err() {
            error!("Connection handler for {peer} panicked");
        }
    })
}

/// Completes on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Error setting up Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Error setting up SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating shutdown"),
        _ = terminate => info!("Received SIGTERM, initiating shutdown"),
    }
}
