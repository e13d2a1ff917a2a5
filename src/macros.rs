//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments like `format!` and emit through the
//! process-wide loggers. Write errors are discarded; call the logger methods
//! directly when they matter.
//!
//! # Examples
//!
//! ```
//! use rust_leveled_logger::{info, init, LogLevel, LoggerConfig};
//!
//! init(&LoggerConfig::new().with_level(LogLevel::Info));
//!
//! // Basic logging
//! info!("Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!("Server listening on port {}", port);
//! ```

/// Log a message at a runtime-selected level.
///
/// Exits the process when `$level` is [`LogLevel::Fatal`](crate::LogLevel::Fatal).
///
/// # Examples
///
/// ```
/// use rust_leveled_logger::{log, LogLevel};
/// log!(LogLevel::Info, "Simple message");
/// log!(LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {{
        let _ = $crate::logf($level, format_args!($($arg)+));
    }};
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// use rust_leveled_logger::debug;
/// debug!("Debug information");
/// debug!("Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {{
        let _ = $crate::debug().printf(format_args!($($arg)+));
    }};
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {{
        let _ = $crate::info().printf(format_args!($($arg)+));
    }};
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// use rust_leveled_logger::warn;
/// warn!("Low disk space");
/// warn!("Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {{
        let _ = $crate::warn().printf(format_args!($($arg)+));
    }};
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {{
        let _ = $crate::error().printf(format_args!($($arg)+));
    }};
}

/// Log a fatal message and terminate the process. Evaluates to `!`.
///
/// # Examples
///
/// ```no_run
/// use rust_leveled_logger::fatal;
/// let path = "/etc/app.json";
/// let _config = std::fs::read_to_string(path)
///     .unwrap_or_else(|e| fatal!("cannot read {}: {}", path, e));
/// ```
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::fatal().printf(format_args!($($arg)+))
    };
}
