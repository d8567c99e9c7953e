//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    sink::Sink,
};
use crate::sinks::Destination;
use parking_lot::Mutex;
use std::path::PathBuf;

/// Failures are reported on the first occurrence and then every this many
const FAILURE_REPORT_INTERVAL: u64 = 1000;

struct LoggerState {
    level: LogLevel,
    destination: Destination,
}

/// Thread-safe leveled logger writing to a single file or TCP destination.
///
/// The threshold and the destination share one mutex, so lines from
/// concurrent callers are written whole and in the order the lock is taken.
///
/// # Example
///
/// ```no_run
/// use loggerlib::{LogLevel, Logger};
///
/// let logger = Logger::file("app.log", LogLevel::Info)?;
/// logger.debug("dropped: below threshold");
/// logger.info("service started");
/// logger.log(LogLevel::Error, "disk almost full");
/// # Ok::<(), loggerlib::LoggerError>(())
/// ```
pub struct Logger {
    state: Mutex<LoggerState>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger appending to the file at `path`.
    ///
    /// The file is created if absent and never truncated.
    ///
    /// # Errors
    ///
    /// [`LoggerError::FileOpen`] with the message `Cannot open log file: <path>`.
    pub fn file(path: impl Into<PathBuf>, level: LogLevel) -> Result<Self> {
        Ok(Self::from_destination(Destination::file(path)?, level))
    }

    /// Create a logger sending lines to `host:port` over TCP.
    ///
    /// Blocks while the host is resolved and each candidate address is
    /// tried, using the operating system's connect timeout.
    ///
    /// # Errors
    ///
    /// - [`LoggerError::Resolution`] (`getaddrinfo: ...`) for unknown hosts
    /// - [`LoggerError::Connection`] (`Socket connection failed`) when no
    ///   candidate accepts
    pub fn socket(host: &str, port: u16, level: LogLevel) -> Result<Self> {
        Ok(Self::from_destination(Destination::socket(host, port)?, level))
    }

    /// Create a logger around an already opened destination
    pub fn from_destination(destination: impl Into<Destination>, level: LogLevel) -> Self {
        Self {
            state: Mutex::new(LoggerState {
                level,
                destination: destination.into(),
            }),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Log a message, ignoring write failures.
    ///
    /// Messages below the threshold return before any timestamp is taken.
    /// A failed write is counted in [`metrics`](Self::metrics) and reported
    /// on stderr, but never propagated.
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        if let Err((e, failures)) = self.write_locked(level, message.as_ref()) {
            report_write_failure(&e, failures);
        }
    }

    /// Log a message and return any write failure to the caller.
    ///
    /// A message below the threshold is not an error.
    pub fn try_log(&self, level: LogLevel, message: impl AsRef<str>) -> Result<()> {
        self.write_locked(level, message.as_ref()).map_err(|(e, _)| e)
    }

    /// Filter, format and write under the lock.
    ///
    /// On failure the error comes back with the failure count it produced.
    fn write_locked(
        &self,
        level: LogLevel,
        message: &str,
    ) -> std::result::Result<(), (LoggerError, u64)> {
        let mut state = self.state.lock();

        if level < state.level {
            self.metrics.record_filtered();
            return Ok(());
        }

        let line = LogEntry::new(level, message).format_line();

        match state.destination.write_line(line.as_bytes()) {
            Ok(()) => {
                self.metrics.record_logged();
                Ok(())
            }
            Err(e) => {
                let failures = self.metrics.record_write_failure() + 1;
                Err((e, failures))
            }
        }
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    /// Change the threshold; visible to every call that locks afterwards
    pub fn set_level(&self, level: LogLevel) {
        self.state.lock().level = level;
    }

    /// Current threshold
    pub fn level(&self) -> LogLevel {
        self.state.lock().level
    }

    /// `"file"` or `"socket"`
    pub fn sink_name(&self) -> &'static str {
        self.state.lock().destination.name()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.state.lock().destination.flush()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```no_run
    /// use loggerlib::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .level(LogLevel::Debug)
    ///     .socket("127.0.0.1", 9000)
    ///     .build()?;
    /// # Ok::<(), LoggerError>(())
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

enum Target {
    File(PathBuf),
    Socket { host: String, port: u16 },
}

/// Builder for constructing a Logger with a fluent API
///
/// The threshold defaults to [`LogLevel::Info`]. Exactly one destination
/// must be chosen; the last call to [`file`](Self::file) or
/// [`socket`](Self::socket) wins.
pub struct LoggerBuilder {
    level: LogLevel,
    target: Option<Target>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            level: LogLevel::default(),
            target: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Append to a file
    #[must_use = "builder methods return a new value"]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.target = Some(Target::File(path.into()));
        self
    }

    /// Send to a TCP endpoint
    #[must_use = "builder methods return a new value"]
    pub fn socket(mut self, host: impl Into<String>, port: u16) -> Self {
        self.target = Some(Target::Socket {
            host: host.into(),
            port,
        });
        self
    }

    /// Open the destination and build the Logger
    pub fn build(self) -> Result<Logger> {
        match self.target {
            Some(Target::File(path)) => Logger::file(path, self.level),
            Some(Target::Socket { host, port }) => Logger::socket(&host, port, self.level),
            None => Err(LoggerError::config(
                "LoggerBuilder",
                "no destination configured, call file() or socket()",
            )),
        }
    }
}

/// First failure and every [`FAILURE_REPORT_INTERVAL`]th one after it
fn should_report(failures: u64) -> bool {
    failures == 1 || failures % FAILURE_REPORT_INTERVAL == 0
}

fn report_write_failure(error: &LoggerError, failures: u64) {
    if should_report(failures) {
        eprintln!(
            "[LOGGER ERROR] {} (failed writes so far: {})",
            error, failures
        );
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
