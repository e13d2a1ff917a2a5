//! Logging context: the owned, lock-guarded set of current loggers
//!
//! A [`LoggingContext`] can be created and passed around explicitly. The
//! crate-level free functions ([`init`], [`debug`], ...) operate on one
//! process-wide instance that starts out with the default configuration
//! (minimum level Error).

use super::color::ColorPalette;
use super::config::LoggerConfig;
use super::error::Result;
use super::factory::{self, LoggerSet};
use super::log_level::LogLevel;
use super::logger::{FatalLogger, Logger};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::fmt::{self, Display};
use std::sync::Arc;

struct ContextState {
    palette: ColorPalette,
    loggers: Arc<LoggerSet>,
}

/// Current color palette and resolved loggers behind a single lock.
///
/// Lookups hold the lock only long enough to clone an `Arc`, so emission
/// happens outside it. A message racing a reconfiguration may still go out
/// through the logger being replaced.
pub struct LoggingContext {
    state: Mutex<ContextState>,
}

impl LoggingContext {
    pub fn new(config: &LoggerConfig) -> Self {
        let mut palette = ColorPalette::new();
        let loggers = Arc::new(factory::resolve(config, &mut palette));
        Self {
            state: Mutex::new(ContextState { palette, loggers }),
        }
    }

    /// Replace every logger with the resolution of `config`.
    pub fn init(&self, config: &LoggerConfig) {
        let mut state = self.state.lock();
        let loggers = factory::resolve(config, &mut state.palette);
        state.loggers = Arc::new(loggers);
    }

    /// Clear the default colors for this and all later configurations.
    ///
    /// Loggers already resolved keep their prefixes until the next
    /// [`init`](Self::init).
    pub fn disable_colors(&self) {
        self.state.lock().palette.disable();
    }

    pub fn palette(&self) -> ColorPalette {
        self.state.lock().palette.clone()
    }

    pub fn loggers(&self) -> Arc<LoggerSet> {
        Arc::clone(&self.state.lock().loggers)
    }

    pub fn logger(&self, level: LogLevel) -> Arc<Logger> {
        Arc::clone(self.state.lock().loggers.get(level))
    }

    pub fn debug(&self) -> Arc<Logger> {
        self.logger(LogLevel::Debug)
    }

    pub fn info(&self) -> Arc<Logger> {
        self.logger(LogLevel::Info)
    }

    pub fn warn(&self) -> Arc<Logger> {
        self.logger(LogLevel::Warn)
    }

    pub fn error(&self) -> Arc<Logger> {
        self.logger(LogLevel::Error)
    }

    pub fn fatal(&self) -> FatalLogger {
        FatalLogger::new(self.logger(LogLevel::Fatal))
    }

    /// Space-joined emission through `level`. Exits the process for Fatal.
    #[track_caller]
    pub fn log(&self, level: LogLevel, values: &[&dyn Display]) -> Result<()> {
        self.logger(level).println(values)
    }

    /// Formatted emission through `level`. Exits the process for Fatal.
    #[track_caller]
    pub fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) -> Result<()> {
        self.logger(level).printf(args)
    }
}

impl Default for LoggingContext {
    fn default() -> Self {
        Self::new(&LoggerConfig::default())
    }
}

impl fmt::Debug for LoggingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("LoggingContext")
            .field("palette", &state.palette)
            .field("loggers", &state.loggers)
            .finish()
    }
}

static GLOBAL: Lazy<LoggingContext> = Lazy::new(LoggingContext::default);

/// The process-wide context behind the crate-level functions.
pub fn global() -> &'static LoggingContext {
    &GLOBAL
}

/// Reconfigure the process-wide loggers.
///
/// # Example
///
/// ```
/// use rust_leveled_logger::{init, LogLevel, LoggerConfig};
///
/// init(&LoggerConfig::new().with_level(LogLevel::Info));
/// rust_leveled_logger::debug().println(&[&"not shown"]).unwrap();
/// ```
pub fn init(config: &LoggerConfig) {
    GLOBAL.init(config);
}

pub fn disable_colors() {
    GLOBAL.disable_colors();
}

pub fn logger(level: LogLevel) -> Arc<Logger> {
    GLOBAL.logger(level)
}

pub fn debug() -> Arc<Logger> {
    GLOBAL.debug()
}

pub fn info() -> Arc<Logger> {
    GLOBAL.info()
}

pub fn warn() -> Arc<Logger> {
    GLOBAL.warn()
}

pub fn error() -> Arc<Logger> {
    GLOBAL.error()
}

pub fn fatal() -> FatalLogger {
    GLOBAL.fatal()
}

#[track_caller]
pub fn log(level: LogLevel, values: &[&dyn Display]) -> Result<()> {
    GLOBAL.log(level, values)
}

#[track_caller]
pub fn logf(level: LogLevel, args: fmt::Arguments<'_>) -> Result<()> {
    GLOBAL.logf(level, args)
}
