//! Error types for the logger

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The log file could not be opened for appending
    #[error("Cannot open log file: {}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Name resolution failed or produced no addresses
    #[error("getaddrinfo: {source}")]
    Resolution {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },

    /// Every resolved candidate address refused or failed the connection
    #[error("Socket connection failed")]
    Connection {
        host: String,
        port: u16,
        #[source]
        source: Option<io::Error>,
    },

    /// Writing a line to the sink failed
    #[error("Failed to write to {sink} sink: {source}")]
    Write {
        sink: &'static str,
        #[source]
        source: io::Error,
    },

    /// Unknown log level name or code
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create a file open error
    pub fn file_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LoggerError::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a resolution error
    pub fn resolution(host: impl Into<String>, port: u16, source: io::Error) -> Self {
        LoggerError::Resolution {
            host: host.into(),
            port,
            source,
        }
    }

    /// Create a connection error, keeping the last attempt's cause if any
    pub fn connection(host: impl Into<String>, port: u16, source: Option<io::Error>) -> Self {
        LoggerError::Connection {
            host: host.into(),
            port,
            source,
        }
    }

    pub fn write(sink: &'static str, source: io::Error) -> Self {
        LoggerError::Write { sink, source }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// True for failures raised while constructing a logger
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            LoggerError::FileOpen { .. }
                | LoggerError::Resolution { .. }
                | LoggerError::Connection { .. }
        )
    }
}
