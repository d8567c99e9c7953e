//! Logging macros for ergonomic log message formatting.
//!
//! These macros forward `format!` output to [`Logger::log`](crate::Logger::log).
//!
//! # Examples
//!
//! ```no_run
//! use loggerlib::prelude::*;
//! use loggerlib::info;
//!
//! let logger = Logger::file("server.log", LogLevel::Info)?;
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```no_run
/// # use loggerlib::prelude::*;
/// # let logger = Logger::file("app.log", LogLevel::Debug)?;
/// use loggerlib::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```no_run
/// # use loggerlib::prelude::*;
/// # let logger = Logger::file("app.log", LogLevel::Info)?;
/// use loggerlib::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
