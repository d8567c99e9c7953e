//! # loggerlib
//!
//! A small leveled logger that writes timestamped lines to exactly one
//! destination: an append-only file or a connected TCP socket.
//!
//! ## Features
//!
//! - **Three levels**: DEBUG, INFO and ERROR with a runtime threshold
//! - **Two sinks**: append-mode file or TCP stream, chosen at construction
//! - **Thread Safe**: one mutex serializes every write, so lines never interleave
//!
//! Every line has the form `[YYYY-MM-DD HH:MM:SS] LABEL message`.

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        DestinationConfig, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, Result, Sink,
    };
    pub use crate::sinks::{Destination, FileSink, SocketSink};
}

pub use crate::core::{
    current_timestamp, DestinationConfig, LogEntry, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, Result, Sink, TIMESTAMP_FORMAT,
};
pub use crate::sinks::{Destination, FileSink, SocketSink};
