//! Log level definitions

use super::error::LoggerError;
use std::fmt;
use std::str::FromStr;

/// Severity channel. Discriminants are the priorities used for threshold
/// comparison (Debug lowest, Fatal highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl LogLevel {
    /// Every severity in ascending priority order.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    #[inline]
    pub fn priority(&self) -> u8 {
        *self as u8
    }

    /// Zero-based slot of this level in per-level tables.
    #[inline]
    pub(crate) fn index(&self) -> usize {
        (*self as usize) - 1
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

/// Case-insensitive lookup of a severity name, `None` when unrecognised.
///
/// ```
/// use rust_leveled_logger::{parse_level, LogLevel};
///
/// assert_eq!(parse_level("Warn"), Some(LogLevel::Warn));
/// assert_eq!(parse_level("verbose"), None);
/// ```
pub fn parse_level(s: &str) -> Option<LogLevel> {
    s.parse().ok()
}
