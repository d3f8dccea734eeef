//! Log setup for the server binary.
//!
//! The library only emits records through the `log` macros. A binary builds one
//! [`env_logger::Logger`] from a [`LogConfig`] and installs it once at startup.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use env_logger::{Builder, Logger, Target};
use log::SetLoggerError;

use crate::server::Error;

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// File every line is appended to, in addition to the console.
    pub file: Option<PathBuf>,
    /// `env_logger` filter directives, e.g. `info` or `microhttp_static=debug`.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: Some(PathBuf::from("server.log")),
            filter: "info".to_string(),
        }
    }
}

/// Writes every log line to a file and to the console.
///
/// Console failures are ignored: a closed stderr never drops a line from the file.
struct Tee<C> {
    console: C,
    file: File,
}

impl<C: Write> Write for Tee<C> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_all(buf)?;
        let _ = self.console.write_all(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()?;
        let _ = self.console.flush();
        Ok(())
    }
}

/// Build a logger producing `<timestamp> - <LEVEL> - <message>` lines.
///
/// The log file is opened in append mode and created if missing.
pub fn build_logger(config: &LogConfig) -> Result<Logger, Error> {
    let mut builder = Builder::new();
    builder.parse_filters(&config.filter).format(|buf, record| {
        writeln!(
            buf,
            "{} - {} - {}",
            buf.timestamp_millis(),
            record.level(),
            record.args()
        )
    });

    match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| Error::Logging {
                    path: path.clone(),
                    source,
                })?;
            builder.target(Target::Pipe(Box::new(Tee {
                console: io::stderr(),
                file,
            })));
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    Ok(builder.build())
}

/// Install `logger` as the process logger. Fails if one is already installed.
pub fn install(logger: Logger) -> Result<(), SetLoggerError> {
    let max_level = logger.filter();
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(max_level);
    Ok(())
}
