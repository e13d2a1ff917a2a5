//! Built-in per-level defaults

use super::color::ColorPalette;
use super::flags::LogFlags;
use super::log_level::LogLevel;
use crate::writers::{ConsoleStream, SharedWriter};
use colored::Color;

/// Minimum level used when a configuration leaves it unset.
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Error;

/// Prefix template; `{}` receives the (possibly colored) level tag.
pub const DEFAULT_PREFIX: &str = "[{}] ";

pub const DEFAULT_FLAGS: LogFlags = LogFlags::STD;

/// Everything a level falls back to when the caller overrides nothing.
#[derive(Debug, Clone)]
pub struct LevelDefaults {
    pub level: LogLevel,
    pub priority: u8,
    pub writer: SharedWriter,
    pub color: Option<Color>,
    pub prefix: &'static str,
    pub flags: LogFlags,
}

impl LevelDefaults {
    fn new(level: LogLevel, palette: &ColorPalette) -> Self {
        let stream = match level {
            LogLevel::Debug | LogLevel::Info | LogLevel::Warn => ConsoleStream::Stdout,
            LogLevel::Error | LogLevel::Fatal => ConsoleStream::Stderr,
        };

        Self {
            level,
            priority: level.priority(),
            writer: SharedWriter::console(stream),
            color: palette.color_for(level),
            prefix: DEFAULT_PREFIX,
            flags: DEFAULT_FLAGS,
        }
    }
}

/// Fresh defaults table, one entry per level in priority order.
///
/// Colors come from `palette`, so a disabled palette yields uncolored
/// defaults.
pub fn defaults(palette: &ColorPalette) -> [LevelDefaults; 5] {
    LogLevel::ALL.map(|level| LevelDefaults::new(level, palette))
}
