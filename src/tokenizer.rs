//! Byte-level tokenizer for RTF input.
//!
//! The tokenizer pulls bytes from a buffered reader and splits them into
//! literal text tokens separated by single terminal characters. It knows
//! nothing about RTF structure beyond those delimiters and the `'a0` escape
//! handled by [`escape`].

use std::io::{self, BufRead};

use crate::error::{ConvertError, Result};

mod escape;

use escape::EscapeMatcher;

/// Delimiter that ended a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Terminal {
    /// `\`, which introduces a control word.
    Backslash,
    /// `{`, which opens a group.
    OpenBrace,
    /// `}`, which closes a group.
    CloseBrace,
    Space,
    Tab,
    Newline,
}

impl Terminal {
    /// Classify `byte` as a terminal, if it is one.
    #[must_use]
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'\\' => Some(Self::Backslash),
            b'{' => Some(Self::OpenBrace),
            b'}' => Some(Self::CloseBrace),
            b' ' => Some(Self::Space),
            b'\t' => Some(Self::Tab),
            b'\n' => Some(Self::Newline),
            _ => None,
        }
    }

    /// The byte this terminal was read from.
    #[must_use]
    pub fn as_byte(self) -> u8 {
        match self {
            Self::Backslash => b'\\',
            Self::OpenBrace => b'{',
            Self::CloseBrace => b'}',
            Self::Space => b' ',
            Self::Tab => b'\t',
            Self::Newline => b'\n',
        }
    }

    #[must_use]
    pub fn is_whitespace(self) -> bool {
        matches!(self, Self::Space | Self::Tab | Self::Newline)
    }

    #[must_use]
    pub fn is_brace(self) -> bool {
        matches!(self, Self::OpenBrace | Self::CloseBrace)
    }
}

/// Outcome of a single [`Tokenizer::next_token`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scan {
    /// A terminal ended the current token.
    Terminal(Terminal),
    /// The input ran out. The token holds whatever partial text was read.
    EndOfStream,
}

/// Pull-based tokenizer over a byte stream.
///
/// Each call to [`next_token`](Self::next_token) clears the token buffer,
/// then accumulates literal bytes until a terminal or the end of input.
/// The buffer is reused between calls and exposed through
/// [`token`](Self::token).
///
/// ```
/// use rtf2txt::{Scan, Terminal, Tokenizer};
///
/// let mut tokens = Tokenizer::new(&b"{\\rtf1 Hi}"[..]);
/// assert_eq!(tokens.next_token()?, Scan::Terminal(Terminal::OpenBrace));
/// assert_eq!(tokens.next_token()?, Scan::Terminal(Terminal::Backslash));
/// assert_eq!(tokens.next_token()?, Scan::Terminal(Terminal::Space));
/// assert_eq!(tokens.token(), b"rtf1");
/// # Ok::<(), rtf2txt::ConvertError>(())
/// ```
pub struct Tokenizer<R> {
    reader: R,
    token: Vec<u8>,
    escape: EscapeMatcher,
}

impl<R: BufRead> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            token: Vec::new(),
            escape: EscapeMatcher::default(),
        }
    }

    /// Text accumulated by the most recent [`next_token`](Self::next_token).
    ///
    /// Never contains a terminal byte.
    #[must_use]
    pub fn token(&self) -> &[u8] {
        &self.token
    }

    /// Read the next token and the terminal that ended it.
    ///
    /// # Errors
    /// Returns [`ConvertError::Read`] if the underlying reader fails.
    pub fn next_token(&mut self) -> Result<Scan> {
        self.token.clear();
        while let Some(byte) = self.next_byte().map_err(ConvertError::Read)? {
            if self.escape.consume(byte, &mut self.token) {
                continue;
            }
            if let Some(terminal) = Terminal::from_byte(byte) {
                return Ok(Scan::Terminal(terminal));
            }
            self.token.push(byte);
        }
        self.escape.abandon(&mut self.token);
        Ok(Scan::EndOfStream)
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            let byte = match self.reader.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if byte.is_some() {
                self.reader.consume(1);
            }
            return Ok(byte);
        }
    }
}
