//! Caller-supplied logging configuration

use super::color::ColorSupport;
use super::flags::LogFlags;
use super::log_level::LogLevel;
use crate::writers::SharedWriter;
use colored::Color;

/// Per-level override. Every field left as `None` falls back to the level's
/// built-in default.
///
/// `flags: Some(LogFlags::NONE)` is an explicit "no metadata" and is distinct
/// from `flags: None`.
#[derive(Debug, Clone, Default)]
pub struct LevelOverride {
    pub writer: Option<SharedWriter>,
    pub color: Option<Color>,
    pub prefix: Option<String>,
    pub flags: Option<LogFlags>,
}

impl LevelOverride {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn writer(mut self, writer: impl Into<SharedWriter>) -> Self {
        self.writer = Some(writer.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Prefix template with one `{}` slot for the level tag
    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, template: impl Into<String>) -> Self {
        self.prefix = Some(template.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: LogFlags) -> Self {
        self.flags = Some(flags);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.writer.is_none() && self.color.is_none() && self.prefix.is_none() && self.flags.is_none()
    }
}

/// Global configuration applied by [`init`](crate::init).
///
/// # Example
///
/// ```
/// use rust_leveled_logger::prelude::*;
///
/// let buffer = MemoryWriter::new();
/// let config = LoggerConfig::new()
///     .with_level(LogLevel::Debug)
///     .with_color_support(ColorSupport::Disabled)
///     .with_override(
///         LogLevel::Debug,
///         LevelOverride::new().writer(buffer.clone()).flags(LogFlags::NONE),
///     );
///
/// let context = LoggingContext::new(&config);
/// context.debug().printf(format_args!("x")).unwrap();
/// assert_eq!(buffer.contents(), "[DEBUG] x\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoggerConfig {
    /// Minimum active level; `None` means [`DEFAULT_LEVEL`](super::registry::DEFAULT_LEVEL)
    pub level: Option<LogLevel>,
    pub debug: LevelOverride,
    pub info: LevelOverride,
    pub warn: LevelOverride,
    pub error: LevelOverride,
    pub fatal: LevelOverride,
    pub color_support: ColorSupport,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_override(mut self, level: LogLevel, level_override: LevelOverride) -> Self {
        *self.override_mut(level) = level_override;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_color_support(mut self, support: ColorSupport) -> Self {
        self.color_support = support;
        self
    }

    pub fn override_for(&self, level: LogLevel) -> &LevelOverride {
        match level {
            LogLevel::Debug => &self.debug,
            LogLevel::Info => &self.info,
            LogLevel::Warn => &self.warn,
            LogLevel::Error => &self.error,
            LogLevel::Fatal => &self.fatal,
        }
    }

    pub fn override_mut(&mut self, level: LogLevel) -> &mut LevelOverride {
        match level {
            LogLevel::Debug => &mut self.debug,
            LogLevel::Info => &mut self.info,
            LogLevel::Warn => &mut self.warn,
            LogLevel::Error => &mut self.error,
            LogLevel::Fatal => &mut self.fatal,
        }
    }
}
