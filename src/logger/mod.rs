//! Logger module
//!
//! Structured key/value logging for the HTTP server. A [`Logger`] is an
//! explicitly injected capability: it is built once at startup from the
//! logging configuration and handed to the parts that need it through
//! application state, never through a process-wide singleton.
//!
//! Info and access lines go to stdout (or a configured file), warnings and
//! errors to stderr (or a configured file).

mod format;
mod writer;

pub use format::AccessLogEntry;
pub use format::{Level, LogFormat};

use std::io;
use std::sync::Arc;

use thiserror::Error;

use crate::config::LoggingConfig;
use writer::LogWriter;

/// Errors building a logger from configuration.
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("invalid log level '{0}'")]
    InvalidLevel(String),
    #[error("invalid log format '{0}'")]
    InvalidFormat(String),
    #[error("failed to open log file: {0}")]
    Io(#[from] io::Error),
}

/// Structured logger handle. Cheap to clone; all clones share one writer.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

struct LoggerInner {
    level: Level,
    format: LogFormat,
    writer: LogWriter,
}

impl Logger {
    /// Build a logger from logging configuration.
    pub fn new(config: &LoggingConfig) -> Result<Self, LoggerError> {
        let level = Level::parse(&config.level)
            .ok_or_else(|| LoggerError::InvalidLevel(config.level.clone()))?;
        let format = LogFormat::parse(&config.format)
            .ok_or_else(|| LoggerError::InvalidFormat(config.format.clone()))?;
        let writer = LogWriter::new(
            config.access_log_file.as_deref(),
            config.error_log_file.as_deref(),
        )?;

        Ok(Self {
            inner: Arc::new(LoggerInner {
                level,
                format,
                writer,
            }),
        })
    }

    pub fn debug(&self, msg: &str, attrs: &[(&str, String)]) {
        self.log(Level::Debug, msg, attrs);
    }

    pub fn info(&self, msg: &str, attrs: &[(&str, String)]) {
        self.log(Level::Info, msg, attrs);
    }

    pub fn warn(&self, msg: &str, attrs: &[(&str, String)]) {
        self.log(Level::Warn, msg, attrs);
    }

    pub fn error(&self, msg: &str, attrs: &[(&str, String)]) {
        self.log(Level::Error, msg, attrs);
    }

    /// Emit one access log line for a completed request.
    pub fn access(&self, entry: &AccessLogEntry) {
        if Level::Info < self.inner.level {
            return;
        }
        let line = format::format_line(
            self.inner.format,
            &chrono::Local::now(),
            Level::Info,
            "request",
            &entry.attrs(),
        );
        self.inner.writer.write_out(&line);
    }

    fn log(&self, level: Level, msg: &str, attrs: &[(&str, String)]) {
        if level < self.inner.level {
            return;
        }
        let line = format::format_line(self.inner.format, &chrono::Local::now(), level, msg, attrs);
        if level >= Level::Warn {
            self.inner.writer.write_err(&line);
        } else {
            self.inner.writer.write_out(&line);
        }
    }
}
