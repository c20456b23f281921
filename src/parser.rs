//! State machine that decides which tokens are document text.
//!
//! The machine first looks for the `{\rtf` header. Until it is found nothing
//! is emitted. Afterwards literal tokens and whitespace terminals go to the
//! [`LineWrapper`], while braces and backslash-introduced control words are
//! consumed structurally.
//!
//! `Block` and `Tag` run the `Text` logic on every step, so text that follows
//! a group opening is emitted like any other text. Font names in a font
//! table therefore reach the output.

use std::fmt;

use log::{debug, log_enabled, trace};

use crate::{
    error::Result,
    tokenizer::Terminal,
    wrap::{LineSink, LineWrapper},
};

/// Parser context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum State {
    /// Waiting for the `{` that opens the document.
    #[default]
    HeaderBrace,
    /// Saw `{`, waiting for the `\` of `\rtf`.
    HeaderBackslash,
    /// Saw `{\`, expecting a control word containing `rtf`.
    HeaderKeyword,
    /// Just opened a group.
    Block,
    /// Reserved for control-word tags; behaves like [`State::Text`].
    Tag,
    /// Plain text.
    Text,
    /// After a backslash: the token is a control word.
    Escape,
}

impl State {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::HeaderBrace => "init_1",
            Self::HeaderBackslash => "init_2",
            Self::HeaderKeyword => "init_3",
            Self::Block => "block",
            Self::Tag => "tag",
            Self::Text => "text",
            Self::Escape => "esc",
        }
    }

    #[must_use]
    pub fn in_header(self) -> bool {
        matches!(
            self,
            Self::HeaderBrace | Self::HeaderBackslash | Self::HeaderKeyword
        )
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Drives the state machine one token at a time.
#[derive(Debug, Default)]
pub struct Parser {
    state: State,
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Whether the `{\rtf` header has been seen.
    #[must_use]
    pub fn header_found(&self) -> bool {
        !self.state.in_header()
    }

    /// Consume one token and the terminal that ended it.
    ///
    /// # Errors
    /// Returns an error if the wrapper fails to write a line.
    pub fn step<S: LineSink>(
        &mut self,
        token: &[u8],
        terminal: Terminal,
        out: &mut LineWrapper<S>,
    ) -> Result<()> {
        if log_enabled!(log::Level::Trace) {
            trace!(
                "[{}] [{}] [{}]",
                self.state,
                String::from_utf8_lossy(token).escape_debug(),
                char::from(terminal.as_byte()).escape_debug()
            );
        }
        self.state = match self.state {
            State::HeaderBrace => {
                if token.is_empty() && terminal == Terminal::OpenBrace {
                    State::HeaderBackslash
                } else {
                    State::HeaderBrace
                }
            }
            State::HeaderBackslash => {
                if token.is_empty() && terminal == Terminal::Backslash {
                    State::HeaderKeyword
                } else {
                    State::HeaderBrace
                }
            }
            State::HeaderKeyword => {
                if contains_rtf(token) {
                    debug!("found rtf header");
                    after_control(terminal)
                } else {
                    State::HeaderBrace
                }
            }
            State::Block | State::Tag | State::Text => emit_text(token, terminal, out)?,
            State::Escape => {
                if token.is_empty() && terminal.is_brace() {
                    // `\{` or `\}` is a literal brace
                    out.push(&[terminal.as_byte()])?;
                    State::Text
                } else {
                    after_control(terminal)
                }
            }
        };
        Ok(())
    }
}

fn contains_rtf(token: &[u8]) -> bool {
    token.windows(3).any(|w| w == b"rtf")
}

/// Next state after a token that is not emitted.
fn after_control(terminal: Terminal) -> State {
    match terminal {
        Terminal::Backslash => State::Escape,
        Terminal::OpenBrace => State::Block,
        _ => State::Text,
    }
}

fn emit_text<S: LineSink>(
    token: &[u8],
    terminal: Terminal,
    out: &mut LineWrapper<S>,
) -> Result<State> {
    if !token.is_empty() {
        out.push(token)?;
    }
    if terminal.is_whitespace() {
        out.push(&[terminal.as_byte()])?;
        return Ok(State::Text);
    }
    Ok(after_control(terminal))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::wrap::DEFAULT_WIDTH;

    /// Run `steps` from `start` and return the final state and the lines
    /// emitted, including whatever is still pending.
    fn run(start: State, steps: &[(&str, Terminal)]) -> (State, Vec<String>) {
        let mut parser = Parser { state: start };
        let mut out = LineWrapper::new(Vec::new(), DEFAULT_WIDTH).expect("width is valid");
        for (token, terminal) in steps {
            parser
                .step(token.as_bytes(), *terminal, &mut out)
                .expect("vec sink cannot fail");
        }
        (parser.state(), out.finish().expect("vec sink cannot fail"))
    }

    #[rstest]
    #[case(State::HeaderBrace, "", Terminal::OpenBrace, State::HeaderBackslash)]
    #[case(State::HeaderBrace, "x", Terminal::OpenBrace, State::HeaderBrace)]
    #[case(State::HeaderBrace, "", Terminal::Backslash, State::HeaderBrace)]
    #[case(State::HeaderBackslash, "", Terminal::Backslash, State::HeaderKeyword)]
    #[case(State::HeaderBackslash, "", Terminal::OpenBrace, State::HeaderBrace)]
    #[case(State::HeaderBackslash, "x", Terminal::Backslash, State::HeaderBrace)]
    #[case(State::HeaderKeyword, "rtf1", Terminal::Backslash, State::Escape)]
    #[case(State::HeaderKeyword, "rtf", Terminal::OpenBrace, State::Block)]
    #[case(State::HeaderKeyword, "xrtfx", Terminal::Space, State::Text)]
    #[case(State::HeaderKeyword, "rtf1", Terminal::CloseBrace, State::Text)]
    #[case(State::HeaderKeyword, "rt", Terminal::Space, State::HeaderBrace)]
    #[case(State::HeaderKeyword, "RTF", Terminal::Space, State::HeaderBrace)]
    fn detects_header(
        #[case] start: State,
        #[case] token: &str,
        #[case] terminal: Terminal,
        #[case] expected: State,
    ) {
        let (state, lines) = run(start, &[(token, terminal)]);
        assert_eq!(state, expected);
        assert!(lines.is_empty());
    }

    #[rstest]
    #[case("", Terminal::OpenBrace, State::Text, "{")]
    #[case("", Terminal::CloseBrace, State::Text, "}")]
    #[case("", Terminal::Backslash, State::Escape, "")]
    #[case("par", Terminal::Backslash, State::Escape, "")]
    #[case("b", Terminal::OpenBrace, State::Block, "")]
    #[case("b", Terminal::CloseBrace, State::Text, "")]
    #[case("f0", Terminal::Space, State::Text, "")]
    #[case("par", Terminal::Newline, State::Text, "")]
    fn swallows_control_words(
        #[case] token: &str,
        #[case] terminal: Terminal,
        #[case] expected: State,
        #[case] emitted: &str,
    ) {
        let (state, lines) = run(State::Escape, &[(token, terminal)]);
        assert_eq!(state, expected);
        assert_eq!(lines.concat(), emitted);
    }

    #[rstest]
    #[case(State::Text)]
    #[case(State::Block)]
    #[case(State::Tag)]
    fn text_logic_runs_in_every_body_state(#[case] start: State) {
        let (state, lines) = run(start, &[("Arial;", Terminal::CloseBrace)]);
        assert_eq!(state, State::Text);
        assert_eq!(lines, vec!["Arial;".to_string()]);
    }

    #[rstest]
    #[case(Terminal::Space, State::Text, "word ")]
    #[case(Terminal::Tab, State::Text, "word\t")]
    #[case(Terminal::Backslash, State::Escape, "word")]
    #[case(Terminal::OpenBrace, State::Block, "word")]
    #[case(Terminal::CloseBrace, State::Text, "word")]
    fn text_dispatches_on_terminal(
        #[case] terminal: Terminal,
        #[case] expected: State,
        #[case] emitted: &str,
    ) {
        let (state, lines) = run(State::Text, &[("word", terminal)]);
        assert_eq!(state, expected);
        assert_eq!(lines.concat(), emitted);
    }

    #[test]
    fn newline_terminal_ends_the_line() {
        let (_, lines) = run(
            State::Text,
            &[("one", Terminal::Newline), ("two", Terminal::CloseBrace)],
        );
        assert_eq!(lines, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn header_found_after_keyword() {
        let mut parser = Parser::new();
        let mut out =
            LineWrapper::new(Vec::<String>::new(), DEFAULT_WIDTH).expect("width is valid");
        assert!(!parser.header_found());
        for (token, terminal) in [
            ("", Terminal::OpenBrace),
            ("", Terminal::Backslash),
            ("rtf1", Terminal::Space),
        ] {
            parser
                .step(token.as_bytes(), terminal, &mut out)
                .expect("vec sink cannot fail");
        }
        assert!(parser.header_found());
        assert_eq!(parser.state().to_string(), "text");
    }
}
