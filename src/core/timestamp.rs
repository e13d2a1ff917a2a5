//! Metadata header rendering
//!
//! Produces the date, time and source-location text that sits between a
//! logger's prefix and the message body, as selected by [`LogFlags`].

use super::flags::LogFlags;
use chrono::{Local, NaiveDateTime, Utc};
use std::fmt::Write;
use std::panic::Location;

/// Wall-clock reading for a header, honouring [`LogFlags::UTC`].
pub fn now(flags: LogFlags) -> NaiveDateTime {
    if flags.contains(LogFlags::UTC) {
        Utc::now().naive_utc()
    } else {
        Local::now().naive_local()
    }
}

/// Append the header for `flags` to `buf`.
///
/// Layout: `2009/01/23 01:23:23.123123 src/main.rs:23: `, each part present
/// only when its flag is set.
///
/// # Examples
///
/// ```
/// use rust_leveled_logger::core::timestamp::write_header;
/// use rust_leveled_logger::LogFlags;
/// use chrono::NaiveDate;
///
/// let at = NaiveDate::from_ymd_opt(2025, 1, 8)
///     .unwrap()
///     .and_hms_micro_opt(10, 30, 45, 123456)
///     .unwrap();
/// let mut buf = String::new();
/// write_header(&mut buf, LogFlags::STD, at, None);
/// assert_eq!(buf, "2025/01/08 10:30:45 ");
/// ```
pub fn write_header(
    buf: &mut String,
    flags: LogFlags,
    at: NaiveDateTime,
    location: Option<&Location<'_>>,
) {
    if flags.intersects(LogFlags::DATE | LogFlags::TIME | LogFlags::MICROSECONDS) {
        if flags.contains(LogFlags::DATE) {
            let _ = write!(buf, "{} ", at.format("%Y/%m/%d"));
        }
        if flags.intersects(LogFlags::TIME | LogFlags::MICROSECONDS) {
            let _ = write!(buf, "{}", at.format("%H:%M:%S"));
            if flags.contains(LogFlags::MICROSECONDS) {
                let _ = write!(buf, "{}", at.format("%.6f"));
            }
            buf.push(' ');
        }
    }

    if flags.intersects(LogFlags::SHORT_FILE | LogFlags::LONG_FILE) {
        let (file, line) = match location {
            Some(loc) => (loc.file(), loc.line()),
            None => ("???", 0),
        };
        let file = if flags.contains(LogFlags::SHORT_FILE) {
            short_file(file)
        } else {
            file
        };
        let _ = write!(buf, "{}:{}: ", file, line);
    }
}

fn short_file(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}
