//! Console destinations

use std::io::{self, Write};

/// Standard stream a logger can write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

impl ConsoleStream {
    pub fn name(&self) -> &'static str {
        match self {
            ConsoleStream::Stdout => "stdout",
            ConsoleStream::Stderr => "stderr",
        }
    }

    pub(crate) fn write_record(&self, bytes: &[u8]) -> io::Result<()> {
        // Locking the handle keeps the record contiguous with respect to
        // other writers on the same stream.
        match self {
            ConsoleStream::Stdout => io::stdout().lock().write_all(bytes),
            ConsoleStream::Stderr => io::stderr().lock().write_all(bytes),
        }
    }

    pub(crate) fn flush(&self) -> io::Result<()> {
        match self {
            ConsoleStream::Stdout => io::stdout().flush(),
            ConsoleStream::Stderr => io::stderr().flush(),
        }
    }
}
