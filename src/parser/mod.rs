pub mod productions;
pub mod raw;
pub mod state;

use tracing::{debug, instrument};

use crate::ast::{Grammar, Identifier, Rule};
use crate::error::{Error, Result};
pub use state::{Checkpoint, Failure, Parsed, State};

/// How `try_parse` treats input left over after the last rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Return whatever rules parsed before the first unrecognized input.
    BestEffort,
    /// Reject any input that isn't part of a rule.
    Strict,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::BestEffort
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
}

impl Options {
    pub fn strict() -> Self {
        Options { mode: Mode::Strict }
    }
}

/// Entry points into the grammar productions.
///
/// The parser keeps a cursor across calls: every entry point starts where the
/// previous one stopped. Use a fresh parser, or `reset`, before parsing a new
/// source.
#[derive(Debug, Default)]
pub struct Parser {
    cursor: usize,
    options: Options,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Parser { cursor: 0, options }
    }

    /// Byte offset the next entry point will start from.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    fn state<'a>(&self, source: &'a str) -> State<'a> {
        State::at(source, self.cursor)
    }

    fn run<'a, T, F>(&mut self, source: &'a str, production: F) -> Option<T>
    where
        F: FnOnce(State<'a>) -> Parsed<'a, T>,
    {
        match production(self.state(source)) {
            Ok((state, value)) => {
                self.cursor = state.position();
                Some(value)
            }
            Err(state) => {
                self.cursor = state.position();
                None
            }
        }
    }

    /// Parse as many rules as possible. Anything after the last rule is
    /// ignored.
    #[instrument(level = "trace", skip(self, source), fields(cursor = self.cursor))]
    pub fn parse(&mut self, source: &str) -> Grammar {
        let (state, grammar) = productions::grammar(self.state(source));
        self.cursor = state.position();
        grammar
    }

    /// Parse rules, failing in strict mode if input remains after the last
    /// rule.
    #[instrument(level = "trace", skip(self, source), fields(cursor = self.cursor))]
    pub fn try_parse(&mut self, source: &str) -> Result<Grammar> {
        let (state, grammar) = productions::grammar(self.state(source));
        self.cursor = state.position();

        if self.options.mode == Mode::Strict && !state.is_at_end() {
            let err = Error::at(&state);
            debug!(%err, "rejecting trailing input");
            return Err(err);
        }
        Ok(grammar)
    }

    pub fn parse_rule(&mut self, source: &str) -> Option<Rule> {
        self.run(source, productions::rule)
    }

    pub fn parse_lhs(&mut self, source: &str) -> Option<Identifier> {
        self.run(source, productions::lhs)
    }

    pub fn parse_rhs(&mut self, source: &str) -> Option<Identifier> {
        self.run(source, productions::rhs)
    }

    pub fn parse_identifier(&mut self, source: &str) -> Option<Identifier> {
        self.run(source, productions::identifier)
    }

    pub fn parse_letter(&mut self, source: &str) -> Option<char> {
        self.run(source, raw::letter)
    }

    pub fn parse_digit(&mut self, source: &str) -> Option<char> {
        self.run(source, raw::digit)
    }

    /// Consume a run of whitespace, `None` if there isn't any.
    pub fn parse_whitespace(&mut self, source: &str) -> Option<String> {
        self.run(source, raw::whitespace).map(str::to_owned)
    }

    /// Consume a single char matching `pattern`.
    pub fn parse_raw<P>(&mut self, source: &str, pattern: P) -> Option<char>
    where
        P: Fn(char) -> bool,
    {
        self.run(source, |state| raw::raw(state, pattern, "pattern"))
    }
}

/// Run `production` over all of `source`.
pub(crate) fn parse_complete<'a, T, F>(source: &'a str, production: F) -> Result<T>
where
    F: FnOnce(State<'a>) -> Parsed<'a, T>,
{
    match production(State::new(source)) {
        Ok((state, value)) if state.is_at_end() => Ok(value),
        Ok((state, _)) => Err(Error::trailing(&state)),
        Err(state) => Err(Error::at(&state)),
    }
}
