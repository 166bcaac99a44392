//! `log` adapter for hello functions
//!
//! This crate adapts [`log`](https://docs.rs/log) to hello functions. `log` is a standard logging crate,
//! used widely across the ecosystem. The host collects whatever a Function writes to its
//! standard streams, so records are written there one line each.
//!
//! You are likely to be interested in the sibling crates:
//! * `hello-functions-guest`: Exporting Functions to the host.
//! * `hello-functions-bytes`: Payload buffers and encodings.

use log::SetLoggerError;
use thiserror::Error;

mod stream_logger;

pub use stream_logger::format_line;

/// Which logging mode to use?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    /// Write records to standard error.
    #[default]
    Stderr,
    /// Write records to standard output.
    Stdout,
}

#[derive(Debug, Error)]
pub enum LogConfigError {
    #[error("Failed to initialize stream logger: {cause}")]
    AlreadyConfigured { cause: SetLoggerError },
}

/// Initializes the logging system with the specified log level and mode.
///
/// Only the first successful call installs a logger. Later calls return
/// [LogConfigError::AlreadyConfigured] and leave the installed logger in place.
pub fn configure_logging(level: log::LevelFilter, mode: LogMode) -> Result<(), LogConfigError> {
    stream_logger::StreamLog::init(level, mode)
        .map_err(|e| LogConfigError::AlreadyConfigured { cause: e })
}
