use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::error;

use microhttp_static::logging::{self, LogConfig};
use microhttp_static::{HttpServer, ServerConfig};

/// Serve the files of a directory over HTTP/1.1.
#[derive(Debug, Parser)]
#[command(name = "microhttp-static", version, about)]
struct Args {
    /// Host name or address to bind to
    #[arg(long, env = "MICROHTTP_HOST", default_value = "localhost")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "MICROHTTP_PORT", default_value_t = 8080)]
    port: u16,

    /// Document root; created if it does not exist
    #[arg(short, long, env = "MICROHTTP_ROOT", default_value = "www")]
    root: PathBuf,

    /// File every log line is appended to
    #[arg(long, env = "MICROHTTP_LOG_FILE", default_value = "server.log")]
    log_file: PathBuf,

    /// Log filter directives (error, warn, info, debug, trace)
    #[arg(long, env = "MICROHTTP_LOG", default_value = "info")]
    log_level: String,

    /// Per-connection deadline in seconds, 0 to disable
    #[arg(long, env = "MICROHTTP_TIMEOUT", default_value_t = 30)]
    timeout: u64,
}

impl Args {
    fn server_config(&self) -> ServerConfig {
        let io_timeout = (self.timeout > 0).then(|| Duration::from_secs(self.timeout));
        ServerConfig::default()
            .with_host(self.host.clone())
            .with_port(self.port)
            .with_document_root(self.root.clone())
            .with_io_timeout(io_timeout)
    }

    fn log_config(&self) -> LogConfig {
        LogConfig {
            file: Some(self.log_file.clone()),
            filter: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let logger = match logging::build_logger(&args.log_config()) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logging::install(logger) {
        eprintln!("Failed to install logger: {e}");
        return ExitCode::FAILURE;
    }

    let server = HttpServer::new(args.server_config());
    match server.start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server error: {e}");
            ExitCode::FAILURE
        }
    }
}
