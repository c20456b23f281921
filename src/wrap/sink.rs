//! Destinations for finished lines.

use std::io::{self, Write};

/// Receives each completed line from a [`LineWrapper`](super::LineWrapper).
///
/// `line` never includes the terminating newline.
pub trait LineSink {
    /// Accept one finished line.
    ///
    /// # Errors
    /// Returns an error if the line cannot be delivered.
    fn write_line(&mut self, line: &[u8]) -> io::Result<()>;
}

/// Streams lines to a writer, each followed by `\n`.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flush the writer and hand it back.
    ///
    /// # Errors
    /// Returns an error if flushing fails.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.writer.write_all(line)?;
        self.writer.write_all(b"\n")
    }
}

/// Collects lines as strings, replacing invalid UTF-8.
impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.push(String::from_utf8_lossy(line).into_owned());
        Ok(())
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }
}
