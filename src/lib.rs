//! Plain-text extraction for Rich Text Format documents.
//!
//! A conversion is a single pass over the input: the [`Tokenizer`] splits
//! bytes into tokens and terminal characters, the [`Parser`] state machine
//! decides which tokens are document text, and the [`LineWrapper`] reflows
//! that text into lines of at most [`DEFAULT_WIDTH`] columns.
//!
//! Control words, colours and embedded objects are not interpreted. Most of
//! them disappear as a side effect of the parser's coarse handling of
//! backslashes and braces, though plain words inside groups (font names in a
//! font table, for instance) are emitted like any other text.

#[cfg(test)]
#[macro_use]
mod test_utils;

mod error;
pub mod io;
pub mod parser;
mod process;
pub mod tokenizer;
pub mod wrap;

#[doc(inline)]
pub use error::{ConvertError, Result};
pub use io::{convert_file, convert_file_to_vec};
pub use parser::{Parser, State};
pub use process::{convert, convert_opts, convert_to_lines};
pub use tokenizer::{Scan, Terminal, Tokenizer};
pub use wrap::{DEFAULT_WIDTH, LineSink, LineWrapper, MIN_WIDTH, WriterSink};
