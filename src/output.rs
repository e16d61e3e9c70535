//! Output management module
//!
//! Streams generated candidates to a newline-delimited wordlist with buffering.

use crate::error::Result;
use log::debug;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default wordlist name, relative to the working directory
pub const DEFAULT_OUTPUT_NAME: &str = "Wordlist.txt";

/// Append-only, buffered candidate sink
///
/// Lines are written in the order they are received. The buffer is flushed
/// when the sink is dropped, so early returns never lose buffered lines.
pub struct WordlistSink<W: Write> {
    writer: BufWriter<W>,
    lines_written: u64,
    bytes_written: u64,
}

impl WordlistSink<File> {
    /// Create (or truncate) the wordlist file at `path`
    pub fn create(path: &Path, buffer_size: usize) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;

        debug!("Opened {:?} for writing", path);
        Ok(Self::new(file, buffer_size))
    }
}

impl<W: Write> WordlistSink<W> {
    /// Wrap any writer
    pub fn new(writer: W, buffer_size: usize) -> Self {
        Self {
            writer: BufWriter::with_capacity(buffer_size, writer),
            lines_written: 0,
            bytes_written: 0,
        }
    }

    /// Write one candidate followed by a newline
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.lines_written += 1;
        self.bytes_written += line.len() as u64 + 1;
        Ok(())
    }

    /// Write every item of `candidates`, stopping at the first I/O error.
    ///
    /// `on_line` runs after each successful write. Returns the number of
    /// lines written by this call.
    pub fn drain<I, F>(&mut self, candidates: I, mut on_line: F) -> Result<u64>
    where
        I: IntoIterator<Item = String>,
        F: FnMut(u64),
    {
        let start = self.lines_written;
        for candidate in candidates {
            self.write_line(&candidate)?;
            on_line(self.lines_written);
        }
        Ok(self.lines_written - start)
    }

    /// Flush the buffer to the underlying writer
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Get number of lines written
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Get bytes written
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Borrow the underlying writer; unflushed lines are not visible in it
    pub fn get_ref(&self) -> &W {
        self.writer.get_ref()
    }
}

impl<W: Write> Drop for WordlistSink<W> {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

/// Ensure the parent directory of `path` exists
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
