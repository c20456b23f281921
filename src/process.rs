//! High-level conversion from an RTF stream to wrapped lines.

use std::io::{BufReader, Read};

use log::debug;

use crate::{
    error::Result,
    parser::Parser,
    tokenizer::{Scan, Tokenizer},
    wrap::{DEFAULT_WIDTH, LineSink, LineWrapper},
};

/// Convert `reader` into lines wrapped at `width`, delivering them to `sink`.
///
/// Lines are handed to the sink as soon as they are complete. Text before
/// the `{\rtf` header is ignored, and a token cut off by the end of the input
/// is dropped. Returns the sink once the input is exhausted.
///
/// # Errors
/// Returns an error if `width` is too small, the reader fails, or the sink
/// rejects a line.
pub fn convert_opts<R: Read, S: LineSink>(reader: R, sink: S, width: usize) -> Result<S> {
    let mut out = LineWrapper::new(sink, width)?;
    let mut tokens = Tokenizer::new(BufReader::new(reader));
    let mut parser = Parser::new();
    let mut steps = 0usize;

    while let Scan::Terminal(terminal) = tokens.next_token()? {
        parser.step(tokens.token(), terminal, &mut out)?;
        steps += 1;
    }
    if !parser.header_found() {
        debug!("no rtf header in {steps} tokens");
    }
    out.finish()
}

/// Convert `reader` at the default width of 78 columns.
///
/// # Errors
/// Returns an error if the reader fails or the sink rejects a line.
pub fn convert<R: Read, S: LineSink>(reader: R, sink: S) -> Result<S> {
    convert_opts(reader, sink, DEFAULT_WIDTH)
}

/// Convert `reader` at the default width and collect the lines.
///
/// ```
/// let lines = rtf2txt::convert_to_lines(&b"{\\rtf Hello world}"[..])?;
/// assert_eq!(lines, ["Hello world"]);
/// # Ok::<(), rtf2txt::ConvertError>(())
/// ```
///
/// # Errors
/// Returns an error if the reader fails.
pub fn convert_to_lines<R: Read>(reader: R) -> Result<Vec<String>> {
    convert(reader, Vec::new())
}
