//! Per-connection request handling.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use log::{debug, info};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::parser::{parse_request, request_line};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::resolver::{content_type_for, PathResolver};
use crate::server::response::{HttpResponse, StatusCode};

/// Handle a single connection: read once, answer once.
///
/// Performs one read of at most `config.read_buffer_size` bytes; whatever does not
/// fit is never looked at. `config.io_timeout` bounds the read and every single
/// write: a client that keeps reading is never cut off, one that stalls for longer
/// than the deadline is. The socket is not closed here, the caller owns it.
///
/// # Returns
///
/// The status that was sent, `None` if the client closed without sending anything,
/// or an error if the exchange failed before the response was fully written.
pub async fn handle_connection(
    socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
    peer: SocketAddr,
    resolver: &PathResolver,
    config: &ServerConfig,
) -> Result<Option<StatusCode>, Error> {
    let mut buf = vec![0; config.read_buffer_size];

    // Read data from the socket
    let n = within(config.io_timeout, socket.read(&mut buf)).await?;
    if n == 0 {
        debug!("{peer} closed the connection without sending a request");
        return Ok(None);
    }
    let input = &buf[..n];

    match request_line(input) {
        Ok(line) => info!("{peer} - {line}"),
        Err(e) => info!("{peer} - <{e}>"),
    }

    let response = match serve(input, resolver).await {
        Ok(response) => response,
        Err(e) => match e.status() {
            Some(StatusCode::NotFound) => {
                debug!("{peer} - {e}");
                HttpResponse::not_found()
            }
            Some(status) => {
                debug!("{peer} - {e}");
                HttpResponse::new(status)
            }
            None => return Err(e),
        },
    };

    write_response(socket, &response, config.io_timeout).await?;
    debug!(
        "{peer} - {code} {reason}, {len} bytes",
        code = response.status.as_u16(),
        reason = response.status.reason_phrase(),
        len = response.body.len()
    );

    Ok(Some(response.status))
}

/// Build the successful response for `input`, or the error that replaces it.
async fn serve(input: &[u8], resolver: &PathResolver) -> Result<HttpResponse, Error> {
    let request = parse_request(input)?;

    if !request.method.is_get() {
        return Err(Error::UnsupportedMethod(request.method));
    }

    let path = resolver.resolve(request.target()).await?;
    let content_type = content_type_for(&path);
    let content = tokio::fs::read(&path).await?;

    Ok(HttpResponse::new(StatusCode::Ok)
        .with_content_type(content_type)
        .with_body_bytes(content))
}

/// Write the whole response, header and body together.
///
/// `stall` applies to each write separately, so the deadline restarts whenever the
/// client accepts more bytes.
async fn write_response(
    socket: &mut (impl AsyncWrite + Unpin),
    response: &HttpResponse,
    stall: Option<Duration>,
) -> Result<(), Error> {
    let bytes = response.to_bytes();
    let mut written = 0;

    while written < bytes.len() {
        let n = within(stall, socket.write(&bytes[written..])).await?;
        if n == 0 {
            return Err(Error::IoError(io::ErrorKind::WriteZero.into()));
        }
        written += n;
    }

    within(stall, socket.flush()).await
}

/// Await an I/O operation, failing with [`Error::Timeout`] once `limit` elapses.
async fn within<T>(
    limit: Option<Duration>,
    operation: impl Future<Output = io::Result<T>>,
) -> Result<T, Error> {
    match limit {
        Some(limit) => tokio::time::timeout(limit, operation)
            .await
            .map_err(|_| Error::Timeout(limit))?
            .map_err(Error::IoError),
        None => operation.await.map_err(Error::IoError),
    }
}
