//! File-based configuration
//!
//! Deserialises a JSON document into a [`LoggerConfig`]:
//!
//! ```json
//! {
//!   "level": "debug",
//!   "color": "never",
//!   "levels": {
//!     "debug": { "writer": { "file": "debug.log" }, "flags": [] },
//!     "warn":  { "color": "cyan", "prefix": "<{}> ", "flags": ["time", "shortfile"] },
//!     "error": { "writer": "stdout" }
//!   }
//! }
//! ```
//!
//! An unrecognised `level` string is treated as absent, so the minimum level
//! falls back to Error.

use super::color::ColorSupport;
use super::config::{LevelOverride, LoggerConfig};
use super::error::{LoggerError, Result};
use super::flags::LogFlags;
use super::log_level::{parse_level, LogLevel};
use crate::writers::{FileWriter, SharedWriter};
use colored::Color;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Probe the platform allow-list
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorSetting {
    pub fn support(self) -> ColorSupport {
        match self {
            ColorSetting::Auto => ColorSupport::detect(),
            ColorSetting::Always => ColorSupport::Enabled,
            ColorSetting::Never => ColorSupport::Disabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriterSetting {
    Stdout,
    Stderr,
    Discard,
    File(PathBuf),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LevelSettings {
    pub writer: Option<WriterSetting>,
    pub color: Option<String>,
    pub prefix: Option<String>,
    pub flags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerSettings {
    pub level: Option<String>,
    #[serde(default)]
    pub color: ColorSetting,
    #[serde(default)]
    pub levels: BTreeMap<String, LevelSettings>,
}

impl LoggerSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger settings",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json(&json)
    }

    /// Build a [`LoggerConfig`], opening any file writers.
    ///
    /// ```
    /// use rust_leveled_logger::{LoggerSettings, LogLevel, LogFlags};
    ///
    /// let settings = LoggerSettings::from_json(
    ///     r#"{ "level": "INFO", "levels": { "info": { "flags": ["date", "utc"] } } }"#,
    /// ).unwrap();
    /// let config = settings.into_config().unwrap();
    /// assert_eq!(config.level, Some(LogLevel::Info));
    /// assert_eq!(config.info.flags, Some(LogFlags::DATE | LogFlags::UTC));
    /// ```
    pub fn into_config(self) -> Result<LoggerConfig> {
        let level = match self.level.as_deref() {
            None => None,
            Some(name) => {
                let parsed = parse_level(name);
                if parsed.is_none() {
                    eprintln!(
                        "[LOGGER WARNING] Unknown log level '{}' in settings, using the default",
                        name
                    );
                }
                parsed
            }
        };

        let mut config = LoggerConfig::new().with_color_support(self.color.support());
        config.level = level;

        for (name, level_settings) in self.levels {
            let target: LogLevel = name.parse().map_err(|_| {
                LoggerError::config("levels", format!("unknown level block '{}'", name))
            })?;
            *config.override_mut(target) = level_settings.into_override(target)?;
        }

        Ok(config)
    }
}

impl LevelSettings {
    fn into_override(self, level: LogLevel) -> Result<LevelOverride> {
        let component = |field: &str| format!("levels.{}.{}", level.to_str().to_lowercase(), field);

        let writer = self.writer.map(open_writer).transpose()?;

        let color = match self.color {
            Some(name) => Some(name.parse::<Color>().map_err(|_| {
                LoggerError::config(component("color"), format!("unknown color '{}'", name))
            })?),
            None => None,
        };

        if let Some(ref template) = self.prefix {
            let slots = template.matches("{}").count();
            if slots != 1 {
                return Err(LoggerError::config(
                    component("prefix"),
                    format!("expected exactly one '{{}}' slot, found {}", slots),
                ));
            }
        }

        let flags = match self.flags {
            Some(names) => {
                let mut flags = LogFlags::NONE;
                for name in names {
                    flags |= name
                        .parse::<LogFlags>()
                        .map_err(|e| LoggerError::config(component("flags"), e.to_string()))?;
                }
                Some(flags)
            }
            None => None,
        };

        Ok(LevelOverride {
            writer,
            color,
            prefix: self.prefix,
            flags,
        })
    }
}

fn open_writer(setting: WriterSetting) -> Result<SharedWriter> {
    Ok(match setting {
        WriterSetting::Stdout => SharedWriter::stdout(),
        WriterSetting::Stderr => SharedWriter::stderr(),
        WriterSetting::Discard => SharedWriter::sink(),
        WriterSetting::File(path) => FileWriter::open(path)?.into(),
    })
}
