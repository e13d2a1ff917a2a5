//! File destination

use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Append-mode log file.
///
/// Records are written straight to the file without buffering so that a
/// fatal exit never loses the final line.
pub struct FileWriter {
    file: File,
    path: PathBuf,
}

impl FileWriter {
    /// Open (creating if needed) `path` for appending.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rust_leveled_logger::writers::FileWriter;
    /// use rust_leveled_logger::{LevelOverride, SharedWriter};
    ///
    /// let file = FileWriter::open("/var/log/app.log").unwrap();
    /// let debug = LevelOverride::new().writer(SharedWriter::from(file));
    /// ```
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_writer(path.display().to_string(), e.to_string()))?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
