//! Logger factory: turns a [`LoggerConfig`] into one concrete logger per level

use super::color::{paint, ColorPalette};
use super::config::LoggerConfig;
use super::flags::LogFlags;
use super::log_level::LogLevel;
use super::logger::Logger;
use super::registry::{self, LevelDefaults, DEFAULT_LEVEL};
use colored::Color;
use std::sync::Arc;

/// The complete set of resolved loggers, one per level.
#[derive(Debug, Clone)]
pub struct LoggerSet {
    loggers: [Arc<Logger>; 5],
}

impl LoggerSet {
    #[inline]
    pub fn get(&self, level: LogLevel) -> &Arc<Logger> {
        &self.loggers[level.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Logger>> {
        self.loggers.iter()
    }
}

/// Resolve `config` into a fresh [`LoggerSet`].
///
/// Levels below the configured minimum get a discarding logger and their
/// overrides are dropped. Every other level takes each override field that is
/// present and falls back to the registry default for the rest.
///
/// When `config.color_support` is disabled the shared `palette` is cleared
/// before anything is resolved. That change outlives this call, and override
/// colors are ignored too.
pub fn resolve(config: &LoggerConfig, palette: &mut ColorPalette) -> LoggerSet {
    let min_level = config.level.unwrap_or(DEFAULT_LEVEL);
    let colors_enabled = config.color_support.is_enabled();

    if !colors_enabled {
        palette.disable();
    }

    let threshold = min_level.priority();
    let loggers = registry::defaults(palette).map(|defaults| {
        let logger = if defaults.priority < threshold {
            Logger::discard(defaults.level)
        } else {
            resolve_level(config, defaults, colors_enabled)
        };
        Arc::new(logger)
    });

    LoggerSet { loggers }
}

fn resolve_level(config: &LoggerConfig, defaults: LevelDefaults, colors_enabled: bool) -> Logger {
    let level_override = config.override_for(defaults.level);

    let writer = level_override.writer.clone().unwrap_or(defaults.writer);
    let color = if colors_enabled {
        level_override.color.or(defaults.color)
    } else {
        None
    };
    let template = level_override.prefix.as_deref().unwrap_or(defaults.prefix);
    let flags: LogFlags = level_override.flags.unwrap_or(defaults.flags);

    let prefix = format_prefix(template, color, defaults.level);
    Logger::new(defaults.level, writer, prefix, flags)
}

/// Substitute the level tag, wrapped in `color` when given, into the first
/// `{}` slot of `template`.
///
/// A template without a slot is used verbatim.
///
/// ```
/// use rust_leveled_logger::core::factory::format_prefix;
/// use rust_leveled_logger::LogLevel;
/// use colored::Color;
///
/// assert_eq!(format_prefix("[{}] ", None, LogLevel::Warn), "[WARN] ");
/// assert_eq!(
///     format_prefix("[{}] ", Some(Color::Yellow), LogLevel::Warn),
///     "[\x1b[33mWARN\x1b[0m] "
/// );
/// ```
pub fn format_prefix(template: &str, color: Option<Color>, level: LogLevel) -> String {
    let tag = match color {
        Some(color) => paint(level.to_str(), color),
        None => level.to_str().to_string(),
    };
    template.replacen("{}", &tag, 1)
}
