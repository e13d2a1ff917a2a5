//! Level colors and color capability

use super::log_level::LogLevel;
use colored::Color;

/// Operating systems whose terminals are assumed to render ANSI colors.
const COLOR_CAPABLE_PLATFORMS: [&str; 2] = ["linux", "macos"];

/// Whether the destination terminal can render ANSI escape sequences.
///
/// Resolution never probes the platform itself; the caller decides, usually
/// through [`ColorSupport::detect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    Enabled,
    Disabled,
}

impl ColorSupport {
    /// Allow-list check against the platform this binary was built for.
    pub fn detect() -> Self {
        Self::for_platform(std::env::consts::OS)
    }

    pub fn for_platform(os: &str) -> Self {
        if COLOR_CAPABLE_PLATFORMS.contains(&os) {
            ColorSupport::Enabled
        } else {
            ColorSupport::Disabled
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        matches!(self, ColorSupport::Enabled)
    }
}

impl Default for ColorSupport {
    fn default() -> Self {
        Self::detect()
    }
}

/// Default color of each channel. Fatal has no slot of its own and borrows
/// the error color.
///
/// `None` means "no color". [`ColorPalette::disable`] clears every slot and
/// the palette stays cleared for the rest of its owner's life.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPalette {
    pub debug: Option<Color>,
    pub info: Option<Color>,
    pub warn: Option<Color>,
    pub error: Option<Color>,
}

impl ColorPalette {
    pub fn new() -> Self {
        Self {
            debug: Some(Color::Green),
            info: Some(Color::Magenta),
            warn: Some(Color::Yellow),
            error: Some(Color::Red),
        }
    }

    /// Palette with every slot cleared.
    pub fn monochrome() -> Self {
        Self {
            debug: None,
            info: None,
            warn: None,
            error: None,
        }
    }

    pub fn color_for(&self, level: LogLevel) -> Option<Color> {
        match level {
            LogLevel::Debug => self.debug,
            LogLevel::Info => self.info,
            LogLevel::Warn => self.warn,
            LogLevel::Error | LogLevel::Fatal => self.error,
        }
    }

    pub fn disable(&mut self) {
        *self = Self::monochrome();
    }

    pub fn is_disabled(&self) -> bool {
        *self == Self::monochrome()
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap `text` in the ANSI foreground escape for `color`.
///
/// Written by hand instead of through `colored::Colorize` so the output does
/// not depend on `colored`'s own terminal and environment checks.
pub fn paint(text: &str, color: Color) -> String {
    format!("\x1b[{}m{}\x1b[0m", color.to_fg_str(), text)
}
