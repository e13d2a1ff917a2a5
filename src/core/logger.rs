//! Resolved logger and message emission

use super::error::Result;
use super::flags::LogFlags;
use super::log_level::LogLevel;
use super::timestamp;
use crate::writers::SharedWriter;
use std::fmt::{self, Display, Write as _};
use std::panic::Location;
use std::sync::Arc;

/// Process exit status used after a fatal message has been written.
pub const FATAL_EXIT_CODE: i32 = 1;

/// A fully materialised emission target for one level.
///
/// Immutable after construction: reconfiguration builds new loggers rather
/// than mutating existing ones.
#[derive(Debug, Clone)]
pub struct Logger {
    level: LogLevel,
    prefix: String,
    flags: LogFlags,
    writer: SharedWriter,
}

impl Logger {
    pub fn new(level: LogLevel, writer: SharedWriter, prefix: impl Into<String>, flags: LogFlags) -> Self {
        Self {
            level,
            prefix: prefix.into(),
            flags,
            writer,
        }
    }

    /// Logger for a suppressed level: null sink, empty prefix, standard flags.
    pub fn discard(level: LogLevel) -> Self {
        Self::new(level, SharedWriter::sink(), String::new(), LogFlags::STD)
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn flags(&self) -> LogFlags {
        self.flags
    }

    pub fn writer(&self) -> &SharedWriter {
        &self.writer
    }

    #[inline]
    pub fn is_discarding(&self) -> bool {
        self.writer.is_sink()
    }

    /// Write `values` joined by single spaces, followed by a newline.
    ///
    /// A Fatal logger terminates the process with [`FATAL_EXIT_CODE`] after
    /// writing, whatever the outcome of the write.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_leveled_logger::prelude::*;
    ///
    /// let buffer = MemoryWriter::new();
    /// let logger = Logger::new(LogLevel::Info, buffer.clone().into(), "[INFO] ", LogFlags::NONE);
    /// logger.println(&[&"listening on port", &8080]).unwrap();
    /// assert_eq!(buffer.contents(), "[INFO] listening on port 8080\n");
    /// ```
    #[track_caller]
    pub fn println(&self, values: &[&dyn Display]) -> Result<()> {
        let written = self.emit(Location::caller(), format_args!("{}", SpaceJoined(values)));
        self.finish(written)
    }

    /// Write a formatted message, appending a newline unless it already ends
    /// with one. Exits afterwards on a Fatal logger, like [`println`](Self::println).
    ///
    /// ```
    /// use rust_leveled_logger::prelude::*;
    ///
    /// let buffer = MemoryWriter::new();
    /// let logger = Logger::new(LogLevel::Warn, buffer.clone().into(), "", LogFlags::NONE);
    /// logger.printf(format_args!("retry {} of {}", 3, 5)).unwrap();
    /// assert_eq!(buffer.contents(), "retry 3 of 5\n");
    /// ```
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        let written = self.emit(Location::caller(), args);
        self.finish(written)
    }

    /// Like [`println`](Self::println), then terminate the process with
    /// [`FATAL_EXIT_CODE`] at any level. Never returns.
    #[track_caller]
    pub fn println_and_exit(&self, values: &[&dyn Display]) -> ! {
        let written = self.emit(Location::caller(), format_args!("{}", SpaceJoined(values)));
        self.exit(written)
    }

    /// Like [`printf`](Self::printf), then terminate the process with
    /// [`FATAL_EXIT_CODE`] at any level. Never returns.
    #[track_caller]
    pub fn printf_and_exit(&self, args: fmt::Arguments<'_>) -> ! {
        let written = self.emit(Location::caller(), args);
        self.exit(written)
    }

    fn emit(&self, location: &Location<'_>, body: fmt::Arguments<'_>) -> Result<()> {
        if self.is_discarding() {
            return Ok(());
        }
        self.output(location, body)
    }

    fn finish(&self, written: Result<()>) -> Result<()> {
        if self.level == LogLevel::Fatal {
            self.exit(written)
        }
        written
    }

    /// A `Display` impl that fails aborts the record: nothing is written and
    /// the error comes back as [`LoggerError::Format`](super::error::LoggerError::Format).
    fn output(&self, location: &Location<'_>, body: fmt::Arguments<'_>) -> Result<()> {
        let mut line = String::with_capacity(self.prefix.len() + 64);
        line.push_str(&self.prefix);
        timestamp::write_header(&mut line, self.flags, timestamp::now(self.flags), Some(location));
        line.write_fmt(body)?;
        if !line.ends_with('\n') {
            line.push('\n');
        }

        self.writer.write_record(line.as_bytes())?;
        Ok(())
    }

    fn exit(&self, written: Result<()>) -> ! {
        if let Err(e) = written {
            eprintln!("[LOGGER ERROR] Failed to write fatal message: {}", e);
        }
        if let Err(e) = self.writer.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        std::process::exit(FATAL_EXIT_CODE)
    }
}

/// Handle on the fatal channel. Both emission operations end the process
/// after writing, whatever the outcome of the write.
///
/// ```no_run
/// let config = std::fs::read_to_string("app.json").unwrap_or_else(|e| {
///     rust_leveled_logger::fatal().printf(format_args!("cannot read config: {}", e))
/// });
/// ```
#[derive(Debug, Clone)]
pub struct FatalLogger {
    logger: Arc<Logger>,
}

impl FatalLogger {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Write `values` space-joined, then exit with [`FATAL_EXIT_CODE`].
    #[track_caller]
    pub fn println(&self, values: &[&dyn Display]) -> ! {
        self.logger.println_and_exit(values)
    }

    /// Write a formatted message, then exit with [`FATAL_EXIT_CODE`].
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) -> ! {
        self.logger.printf_and_exit(args)
    }
}

struct SpaceJoined<'a>(&'a [&'a dyn Display]);

impl Display for SpaceJoined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            Display::fmt(value, f)?;
        }
        Ok(())
    }
}
