//! # Rust Leveled Logger
//!
//! A small leveled logging facade with one independently configured logger
//! per severity.
//!
//! ## Features
//!
//! - **Five channels**: debug, info, warn, error and fatal, each with its own
//!   writer, prefix template, color and metadata flags
//! - **Single threshold**: levels below the configured minimum write to a
//!   null sink
//! - **Atomic reconfiguration**: [`init`] swaps the whole logger set under a
//!   lock; lookups never block on I/O
//! - **Explicit fatal exit**: the fatal channel's emission never returns
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//!
//! let buffer = MemoryWriter::new();
//! init(
//!     &LoggerConfig::new()
//!         .with_level(LogLevel::Debug)
//!         .with_color_support(ColorSupport::Disabled)
//!         .with_override(LogLevel::Debug, LevelOverride::new().writer(buffer.clone()).flags(LogFlags::NONE)),
//! );
//!
//! debug().println(&[&"cache", &"warm"]).unwrap();
//! assert_eq!(buffer.contents(), "[DEBUG] cache warm\n");
//! ```

pub mod core;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::context::{debug, error, fatal, info, init, warn};
    pub use crate::core::{
        ColorSupport, FatalLogger, LevelOverride, LogFlags, LogLevel, Logger, LoggerConfig,
        LoggerError, LoggerSettings, LoggingContext, Result,
    };
    pub use crate::writers::{FileWriter, MemoryWriter, SharedWriter};
}

pub use crate::core::context::{
    debug, disable_colors, error, fatal, global, info, init, log, logf, logger, warn,
};
pub use crate::core::{
    parse_level, ColorPalette, ColorSupport, FatalLogger, LevelOverride, LogFlags, LogLevel,
    Logger, LoggerConfig, LoggerError, LoggerSet, LoggerSettings, LoggingContext, Result,
    DEFAULT_FLAGS, DEFAULT_LEVEL, DEFAULT_PREFIX, FATAL_EXIT_CODE,
};
pub use writers::{ConsoleStream, FileWriter, MemoryWriter, SharedWriter};
