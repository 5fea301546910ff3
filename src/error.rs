use std::error;
use std::fmt::{self, Display};

use crate::parser::State;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A production failed at `pos`, the furthest point any matcher reached.
    Parse {
        pos: usize,
        line: usize,
        column: usize,
        expected: &'static str,
    },
    /// Input remains after the last complete production.
    TrailingInput {
        pos: usize,
        line: usize,
        column: usize,
    },
}

impl Error {
    /// Build an error describing why parsing stopped at `state`.
    pub(crate) fn at(state: &State<'_>) -> Error {
        let input = state.input();
        match state.furthest_failure() {
            Some(failure) if failure.pos >= state.position() => {
                let (line, column) = line_column(input, failure.pos);
                Error::Parse {
                    pos: failure.pos,
                    line,
                    column,
                    expected: failure.expected,
                }
            }
            _ => Error::trailing(state),
        }
    }

    /// Input remains at `state` after a complete production.
    pub(crate) fn trailing(state: &State<'_>) -> Error {
        let pos = state.position();
        let (line, column) = line_column(state.input(), pos);
        Error::TrailingInput { pos, line, column }
    }

    /// Byte offset into the source.
    pub fn pos(&self) -> usize {
        match *self {
            Error::Parse { pos, .. } | Error::TrailingInput { pos, .. } => pos,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Parse {
                line,
                column,
                expected,
                ..
            } => write!(f, "failed to parse: expected {} at {}:{}", expected, line, column),
            Error::TrailingInput { line, column, .. } => {
                write!(f, "failed to parse: unexpected input at {}:{}", line, column)
            }
        }
    }
}

impl error::Error for Error {}

/// 1-based line and column of a byte offset. Columns count chars.
pub fn line_column(input: &str, pos: usize) -> (usize, usize) {
    let mut end = pos.min(input.len());
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    let before = &input[..end];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
