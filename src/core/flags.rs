//! Formatting flags controlling the metadata written before each message

use super::error::LoggerError;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

/// Bit set selecting which metadata precedes a message.
///
/// ```
/// use rust_leveled_logger::LogFlags;
///
/// let flags = LogFlags::DATE | LogFlags::SHORT_FILE;
/// assert!(flags.contains(LogFlags::DATE));
/// assert!(!flags.contains(LogFlags::TIME));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LogFlags(u32);

impl LogFlags {
    /// No metadata at all
    pub const NONE: LogFlags = LogFlags(0);
    /// Local date: `2009/01/23`
    pub const DATE: LogFlags = LogFlags(1 << 0);
    /// Local time: `01:23:23`
    pub const TIME: LogFlags = LogFlags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`, implies TIME
    pub const MICROSECONDS: LogFlags = LogFlags(1 << 2);
    /// Full source path and line: `/a/b/c/d.rs:23`
    pub const LONG_FILE: LogFlags = LogFlags(1 << 3);
    /// Final path element and line: `d.rs:23`, overrides LONG_FILE
    pub const SHORT_FILE: LogFlags = LogFlags(1 << 4);
    /// Use UTC rather than the local time zone
    pub const UTC: LogFlags = LogFlags(1 << 5);
    /// Date and time, the default for every level
    pub const STD: LogFlags = LogFlags(Self::DATE.0 | Self::TIME.0);

    const ALL_BITS: u32 = (1 << 6) - 1;

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Build from raw bits, dropping unknown ones.
    #[inline]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        LogFlags(bits & Self::ALL_BITS)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, other: LogFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn intersects(self, other: LogFlags) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for LogFlags {
    type Output = LogFlags;

    fn bitor(self, rhs: LogFlags) -> LogFlags {
        LogFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for LogFlags {
    fn bitor_assign(&mut self, rhs: LogFlags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for LogFlags {
    type Output = LogFlags;

    fn bitand(self, rhs: LogFlags) -> LogFlags {
        LogFlags(self.0 & rhs.0)
    }
}

impl FromStr for LogFlags {
    type Err = LoggerError;

    /// Parse a single flag name, as used in settings files
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "date" => Ok(LogFlags::DATE),
            "time" => Ok(LogFlags::TIME),
            "microseconds" => Ok(LogFlags::MICROSECONDS),
            "longfile" => Ok(LogFlags::LONG_FILE),
            "shortfile" => Ok(LogFlags::SHORT_FILE),
            "utc" => Ok(LogFlags::UTC),
            "std" => Ok(LogFlags::STD),
            _ => Err(LoggerError::config("flags", format!("unknown flag '{}'", s))),
        }
    }
}

impl fmt::Display for LogFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(LogFlags, &str); 6] = [
            (LogFlags::DATE, "date"),
            (LogFlags::TIME, "time"),
            (LogFlags::MICROSECONDS, "microseconds"),
            (LogFlags::LONG_FILE, "longfile"),
            (LogFlags::SHORT_FILE, "shortfile"),
            (LogFlags::UTC, "utc"),
        ];

        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
