//! Greedy reflow of extracted text into fixed-width lines.
//!
//! Text arrives in fragments: whole tokens and single whitespace terminals.
//! [`LineWrapper`] keeps the unfinished line in a buffer and hands completed
//! lines to a [`LineSink`] as soon as they are known, so output streams while
//! the input is still being read.
//!
//! Widths are counted in bytes. The input is treated as 8-bit text and no
//! attempt is made to decode it.

mod sink;

pub use sink::{LineSink, WriterSink};

use crate::error::{ConvertError, Result};

/// Default maximum line width.
pub const DEFAULT_WIDTH: usize = 78;

/// Smallest width at which the wrapper can always make progress.
pub const MIN_WIDTH: usize = 2;

/// Whitespace that may serve as a break point.
///
/// Matches the C locale `isspace` set, which includes vertical tab, form
/// feed and carriage return as well as the terminal whitespace.
#[inline]
pub(crate) fn is_break_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Accumulates text and flushes it as lines no wider than `width`.
///
/// A line only exceeds `width` when it is flushed by an explicit newline
/// fragment, in which case it may carry that many bytes plus the newline.
///
/// ```
/// use rtf2txt::LineWrapper;
///
/// let mut lines: Vec<String> = Vec::new();
/// let mut wrapper = LineWrapper::new(&mut lines, 10)?;
/// for fragment in ["alpha", " ", "beta", " ", "gamma"] {
///     wrapper.push(fragment.as_bytes())?;
/// }
/// wrapper.finish()?;
/// assert_eq!(lines, ["alpha", "beta gamma"]);
/// # Ok::<(), rtf2txt::ConvertError>(())
/// ```
#[derive(Debug)]
pub struct LineWrapper<S> {
    buffer: Vec<u8>,
    width: usize,
    sink: S,
}

impl<S: LineSink> LineWrapper<S> {
    /// Create a wrapper that emits lines into `sink`.
    ///
    /// # Errors
    /// Returns [`ConvertError::Width`] if `width` is below [`MIN_WIDTH`].
    pub fn new(sink: S, width: usize) -> Result<Self> {
        if width < MIN_WIDTH {
            return Err(ConvertError::Width {
                width,
                min: MIN_WIDTH,
            });
        }
        Ok(Self {
            buffer: Vec::with_capacity(width + 1),
            width,
            sink,
        })
    }

    /// Text waiting for the rest of its line.
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Append a fragment of extracted text.
    ///
    /// A fragment consisting of a single `\n` ends the current line
    /// unconditionally, even when the buffer is empty. Any other fragment is
    /// appended and the buffer is then split until it fits within the width.
    ///
    /// # Errors
    /// Returns [`ConvertError::Write`] if the sink rejects a line.
    pub fn push(&mut self, fragment: &[u8]) -> Result<()> {
        if fragment == b"\n" {
            return self.flush_buffer();
        }
        self.buffer.extend_from_slice(fragment);
        while self.buffer.len() > self.width {
            self.split_once()?;
        }
        Ok(())
    }

    /// Flush any remaining text as a final line and return the sink.
    ///
    /// An empty buffer produces no line.
    ///
    /// # Errors
    /// Returns [`ConvertError::Write`] if the sink rejects the line.
    pub fn finish(mut self) -> Result<S> {
        if !self.buffer.is_empty() {
            self.flush_buffer()?;
        }
        Ok(self.sink)
    }

    fn flush_buffer(&mut self) -> Result<()> {
        self.sink
            .write_line(&self.buffer)
            .map_err(ConvertError::Write)?;
        self.buffer.clear();
        Ok(())
    }

    /// Emit one line from the front of an over-long buffer.
    ///
    /// Breaks at the last whitespace within the first `width` bytes. Without
    /// one, the break falls at `width - 1`. The byte at the break position is
    /// discarded either way.
    fn split_once(&mut self) -> Result<()> {
        let window = &self.buffer[..self.width];
        let (end, resume) = match window.iter().rposition(|&b| is_break_space(b)) {
            Some(pos) => (pos, pos + 1),
            None => (self.width - 1, self.width),
        };
        self.sink
            .write_line(&self.buffer[..end])
            .map_err(ConvertError::Write)?;
        self.buffer.drain(..resume);
        Ok(())
    }
}
