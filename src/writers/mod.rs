//! Output destinations for resolved loggers
//!
//! Every logger holds a [`SharedWriter`]: a cheap, cloneable handle to one of
//! the console streams, a null sink, or any caller-supplied `Write + Send`.

pub mod console;
pub mod file;
pub mod memory;

pub use console::ConsoleStream;
pub use file::FileWriter;
pub use memory::MemoryWriter;

use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

#[derive(Clone)]
enum Target {
    Console(ConsoleStream),
    Sink,
    Custom(Arc<Mutex<Box<dyn Write + Send>>>),
}

/// Cloneable byte destination shared by every logger that writes to it.
///
/// Each log line is delivered with a single `write_all` while the
/// destination is locked, so concurrent lines never interleave.
#[derive(Clone)]
pub struct SharedWriter {
    target: Target,
}

impl SharedWriter {
    /// Wrap any writer. Clones of the handle share the same underlying writer.
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            target: Target::Custom(Arc::new(Mutex::new(Box::new(writer)))),
        }
    }

    pub fn stdout() -> Self {
        Self::console(ConsoleStream::Stdout)
    }

    pub fn stderr() -> Self {
        Self::console(ConsoleStream::Stderr)
    }

    pub fn console(stream: ConsoleStream) -> Self {
        Self {
            target: Target::Console(stream),
        }
    }

    /// Destination that discards everything written to it.
    pub fn sink() -> Self {
        Self { target: Target::Sink }
    }

    #[inline]
    pub fn is_sink(&self) -> bool {
        matches!(self.target, Target::Sink)
    }

    /// Write one complete record.
    pub fn write_record(&self, bytes: &[u8]) -> io::Result<()> {
        match &self.target {
            Target::Console(stream) => stream.write_record(bytes),
            Target::Sink => Ok(()),
            Target::Custom(writer) => writer.lock().write_all(bytes),
        }
    }

    pub fn flush(&self) -> io::Result<()> {
        match &self.target {
            Target::Console(stream) => stream.flush(),
            Target::Sink => Ok(()),
            Target::Custom(writer) => writer.lock().flush(),
        }
    }
}

impl fmt::Debug for SharedWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Target::Console(stream) => write!(f, "SharedWriter({})", stream.name()),
            Target::Sink => f.write_str("SharedWriter(sink)"),
            Target::Custom(_) => f.write_str("SharedWriter(custom)"),
        }
    }
}

impl From<ConsoleStream> for SharedWriter {
    fn from(stream: ConsoleStream) -> Self {
        Self::console(stream)
    }
}

impl From<MemoryWriter> for SharedWriter {
    fn from(writer: MemoryWriter) -> Self {
        Self::new(writer)
    }
}

impl From<FileWriter> for SharedWriter {
    fn from(writer: FileWriter) -> Self {
        Self::new(writer)
    }
}
