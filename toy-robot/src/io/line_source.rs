//! Line sources feeding the simulation loop.
//!
//! The [`LineSource`] trait decouples the loop from where commands come from
//! (a file or standard input). Tests use scripted sources that return
//! predetermined lines or I/O failures.
//!
//! Resources are released when a source is dropped; the loop takes its source
//! by value so this happens on every exit path.

use std::fs::File;
use std::io::{BufRead, BufReader, Stdin, StdinLock};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Abstraction over line-oriented command input.
pub trait LineSource {
    /// Next line without its terminator, or `None` at end of input.
    ///
    /// An `Err` is a failure of the underlying input and ends the run.
    fn next_line(&mut self) -> Result<Option<String>>;
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn next_line(&mut self) -> Result<Option<String>> {
        (**self).next_line()
    }
}

/// Line source over any buffered reader.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// garbled line reaches the parser and is dropped there instead of aborting
/// the run.
pub struct ReaderLineSource<R> {
    reader: R,
    label: String,
    buf: Vec<u8>,
    lines_read: u64,
}

impl<R: BufRead> ReaderLineSource<R> {
    pub fn new(reader: R, label: impl Into<String>) -> Self {
        Self {
            reader,
            label: label.into(),
            buf: Vec::new(),
            lines_read: 0,
        }
    }
}

impl<R: BufRead> LineSource for ReaderLineSource<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .with_context(|| format!("read line {} of {}", self.lines_read + 1, self.label))?;
        if read == 0 {
            return Ok(None);
        }
        self.lines_read += 1;
        let mut line = self.buf.as_slice();
        line = line.strip_suffix(b"\n").unwrap_or(line);
        line = line.strip_suffix(b"\r").unwrap_or(line);
        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }
}

impl<R> Drop for ReaderLineSource<R> {
    fn drop(&mut self) {
        debug!(source = %self.label, lines = self.lines_read, "closing line source");
    }
}

pub type FileLineSource = ReaderLineSource<BufReader<File>>;
pub type StdinLineSource = ReaderLineSource<StdinLock<'static>>;

/// Open `path` for line-by-line reading.
pub fn open_file(path: &Path) -> Result<FileLineSource> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    Ok(ReaderLineSource::new(
        BufReader::new(file),
        path.display().to_string(),
    ))
}

/// Read commands from the process's standard input until EOF.
pub fn stdin(handle: Stdin) -> StdinLineSource {
    ReaderLineSource::new(handle.lock(), "standard input")
}
