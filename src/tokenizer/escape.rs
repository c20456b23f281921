//! Recognition of the `'a0` hex escape.
//!
//! RTF writes a non-breaking space as `\'a0`. The tokenizer drops the
//! `'a0` (or `'A0`) part wherever it appears, so the escape contributes
//! nothing to the surrounding token.

/// How much of `'a0` has been seen so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Progress {
    #[default]
    Idle,
    Quote,
    QuoteHex(u8),
}

/// Incremental matcher for the escape pattern.
///
/// While a match is pending the matcher holds a strict prefix of the
/// pattern. That prefix is either elided as a whole or handed back to the
/// token verbatim; it is never partially dropped.
#[derive(Debug, Default)]
pub(super) struct EscapeMatcher {
    progress: Progress,
}

impl EscapeMatcher {
    /// Feed one input byte.
    ///
    /// Returns `true` when the byte was taken by the matcher. On a mismatch
    /// the pending prefix is appended to `token` and the byte is offered
    /// again from the idle state, so it may open a new match. Returns `false`
    /// when the caller should handle the byte itself.
    pub(super) fn consume(&mut self, byte: u8, token: &mut Vec<u8>) -> bool {
        match (self.progress, byte) {
            (Progress::Idle, b'\'') => {
                self.progress = Progress::Quote;
                true
            }
            (Progress::Idle, _) => false,
            (Progress::Quote, b'a' | b'A') => {
                self.progress = Progress::QuoteHex(byte);
                true
            }
            (Progress::QuoteHex(_), b'0') => {
                self.progress = Progress::Idle;
                true
            }
            _ => {
                self.abandon(token);
                self.consume(byte, token)
            }
        }
    }

    /// Return any pending prefix to `token` as literal text.
    pub(super) fn abandon(&mut self, token: &mut Vec<u8>) {
        match std::mem::take(&mut self.progress) {
            Progress::Idle => {}
            Progress::Quote => token.push(b'\''),
            Progress::QuoteHex(hex) => token.extend_from_slice(&[b'\'', hex]),
        }
    }

    #[cfg(test)]
    fn is_pending(&self) -> bool {
        self.progress != Progress::Idle
    }
}
