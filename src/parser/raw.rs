//! Single character matchers.
//!
//! Every matcher either consumes input and advances the state, or consumes
//! nothing and hands back the state it was given. Not matching is not an
//! error.

use nom::{bytes::complete::take_while1, character::complete::satisfy, IResult};

use crate::parser::state::{Parsed, State};
use crate::symbol::Symbol;

/// Match a single char satisfying `pattern`.
pub fn raw<'a, P>(state: State<'a>, pattern: P, expected: &'static str) -> Parsed<'a, char>
where
    P: Fn(char) -> bool,
{
    let res: IResult<&'a str, char> = satisfy(pattern)(state.rest());
    match res {
        Ok((rem, c)) => Ok((state.advance_to(rem), c)),
        Err(_) => Err(state.fail(expected)),
    }
}

/// `[A-Za-z]`
pub fn letter(state: State<'_>) -> Parsed<'_, char> {
    raw(state, |c| c.is_ascii_alphabetic(), "letter")
}

/// `[0-9]`
pub fn digit(state: State<'_>) -> Parsed<'_, char> {
    raw(state, |c| c.is_ascii_digit(), "digit")
}

pub fn underscore(state: State<'_>) -> Parsed<'_, char> {
    raw(state, |c| c == '_', "'_'")
}

/// Match one of the notation's symbols.
pub fn symbol(state: State<'_>, symbol: Symbol) -> Parsed<'_, char> {
    let expected = symbol.as_char();
    raw(state, move |c| c == expected, symbol.expected())
}

/// The `\s` class: Unicode White_Space plus the byte order mark, minus NEL.
pub fn is_space(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Consume as much whitespace as possible. Fails if there is none.
pub fn whitespace(state: State<'_>) -> Parsed<'_, &str> {
    let res: IResult<&str, &str> = take_while1(is_space)(state.rest());
    match res {
        Ok((rem, matched)) => Ok((state.advance_to(rem), matched)),
        Err(_) => Err(state.fail("whitespace")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_matches_pattern() {
        let tests: Vec<(&str, fn(char) -> bool, Option<char>)> = vec![
            ("=", |c| c == '=', Some('=')),
            (";", |c| c == '=', None),
            ("", |c| c == '=', None),
            ("é", char::is_alphabetic, Some('é')),
        ];
        for test in tests {
            let state = State::new(test.0);
            match raw(state, test.1, "test") {
                Ok((state, c)) => {
                    assert_eq!(Some(c), test.2, "input: {:?}", test.0);
                    assert_eq!(state.position(), c.len_utf8());
                }
                Err(state) => {
                    assert_eq!(None, test.2, "input: {:?}", test.0);
                    assert_eq!(state.position(), 0);
                }
            }
        }
    }

    #[test]
    fn letters_and_digits() {
        assert_eq!(letter(State::new("a1")).map(|(_, c)| c).ok(), Some('a'));
        assert_eq!(letter(State::new("Z")).map(|(_, c)| c).ok(), Some('Z'));
        assert!(letter(State::new("1a")).is_err());
        assert!(letter(State::new("_")).is_err());
        assert!(letter(State::new("é")).is_err());

        assert_eq!(digit(State::new("7")).map(|(_, c)| c).ok(), Some('7'));
        assert!(digit(State::new("a")).is_err());
        assert_eq!(underscore(State::new("_a")).map(|(_, c)| c).ok(), Some('_'));
    }

    #[test]
    fn symbol_records_expected() {
        let state = symbol(State::new("x"), Symbol::Termination).unwrap_err();
        assert_eq!(state.furthest_failure().map(|f| f.expected), Some("';'"));

        let (state, c) = symbol(State::new("= b"), Symbol::Definition).unwrap();
        assert_eq!(c, '=');
        assert_eq!(state.rest(), " b");
    }

    #[test]
    fn whitespace_is_maximal() {
        let tests = vec![
            ("    ", Some("    ")),
            (" \t\n\r x", Some(" \t\n\r ")),
            ("x ", None),
            ("", None),
            ("\u{feff}\u{a0}\u{3000}x", Some("\u{feff}\u{a0}\u{3000}")),
            ("\u{85}", None),
            (" \u{85}", Some(" ")),
        ];
        for test in tests {
            let got = whitespace(State::new(test.0)).map(|(_, ws)| ws).ok();
            assert_eq!(got, test.1, "input: {:?}", test.0);
        }
    }
}
