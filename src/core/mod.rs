//! Core logger types: levels, registry, factory, emission and the shared context

pub mod color;
pub mod config;
pub mod context;
pub mod error;
pub mod factory;
pub mod flags;
pub mod log_level;
pub mod logger;
pub mod registry;
pub mod settings;
pub mod timestamp;

pub use color::{ColorPalette, ColorSupport};
pub use config::{LevelOverride, LoggerConfig};
pub use context::LoggingContext;
pub use error::{LoggerError, Result};
pub use factory::{format_prefix, resolve, LoggerSet};
pub use flags::LogFlags;
pub use log_level::{parse_level, LogLevel};
pub use logger::{FatalLogger, Logger, FATAL_EXIT_CODE};
pub use registry::{LevelDefaults, DEFAULT_FLAGS, DEFAULT_LEVEL, DEFAULT_PREFIX};
pub use settings::LoggerSettings;
