//! Grammar productions.
//!
//! grammar    = { rule } ;
//! rule       = lhs , "=" , rhs , ";" ;
//! lhs        = identifier ;
//! rhs        = identifier ;
//! identifier = letter , { letter | digit | "_" } ;

use tracing::{debug, trace};

use crate::ast::{Grammar, Identifier, Lhs, Rhs, Rule};
use crate::parser::raw;
use crate::parser::state::{Parsed, State};
use crate::symbol::Symbol;

pub fn identifier<'a>(state: State<'a>) -> Parsed<'a, Identifier> {
    let (state, first) = raw::letter(state).map_err(|state| state.fail("identifier"))?;

    let tail = [
        raw::letter as fn(_) -> _,
        raw::digit as fn(_) -> _,
        raw::underscore as fn(_) -> _,
    ];
    let (state, rest) = state.repeat(|state| state.any_of(&tail));

    let mut value = String::with_capacity(rest.len() + 1);
    value.push(first);
    value.extend(rest);

    trace!(identifier = %value, pos = state.position());
    Ok((state, Identifier::new_unchecked(value)))
}

pub fn lhs(state: State<'_>) -> Parsed<'_, Lhs> {
    identifier(state)
}

/// Right hand side of a rule. Only bare identifiers for now.
pub fn rhs(state: State<'_>) -> Parsed<'_, Rhs> {
    identifier(state)
}

/// Skip any whitespace.
pub fn skip_whitespace(state: State<'_>) -> State<'_> {
    state.optional(raw::whitespace).0
}

/// Parse a single `lhs = rhs ;` rule. The position is left untouched if the
/// rule doesn't match.
pub fn rule(state: State<'_>) -> Parsed<'_, Rule> {
    state.attempt(|state| {
        let (state, lhs) = lhs(state)?;
        let state = skip_whitespace(state);
        let (state, _) = raw::symbol(state, Symbol::Definition)?;
        let state = skip_whitespace(state);
        let (state, rhs) = rhs(state)?;
        let state = skip_whitespace(state);
        let (state, _) = raw::symbol(state, Symbol::Termination)?;

        trace!(%lhs, %rhs, "rule");
        Ok((state, Rule::new(lhs, rhs)))
    })
}

/// Parse as many rules as possible. Never fails; parsing stops at the first
/// thing that isn't a rule, leaving the state at its start.
pub fn grammar(state: State<'_>) -> (State<'_>, Grammar) {
    let mut state = state;
    let mut rules = Vec::new();

    while !state.is_at_end() {
        state = skip_whitespace(state);
        if state.is_at_end() {
            break;
        }

        match rule(state) {
            Ok((next, rule)) => {
                state = next;
                rules.push(rule);
            }
            Err(next) => {
                state = next;
                debug!(
                    pos = state.position(),
                    failure = ?state.furthest_failure(),
                    "stopped before end of input"
                );
                break;
            }
        }
    }

    (state, Grammar::new(rules))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::state::Failure;

    struct TestCase<T> {
        input: &'static str,
        // Expected value and remaining input, None when the production should
        // not match.
        out: Option<(T, &'static str)>,
    }

    fn assert_test_cases<T, F>(f: F, tests: Vec<TestCase<T>>)
    where
        T: std::fmt::Debug + Eq,
        F: for<'a> Fn(State<'a>) -> Parsed<'a, T>,
    {
        for t in tests {
            match (f(State::new(t.input)), t.out) {
                (Ok((state, got)), Some((want, rest))) => {
                    assert_eq!(got, want, "input: {:?}", t.input);
                    assert_eq!(state.rest(), rest, "input: {:?}", t.input);
                }
                (Err(state), None) => {
                    assert_eq!(state.position(), 0, "input: {:?}", t.input);
                }
                (got, want) => panic!("input: {:?}, got: {:?}, want: {:?}", t.input, got, want),
            }
        }
    }

    fn ident(s: &str) -> Identifier {
        Identifier::new_unchecked(s.to_owned())
    }

    #[test]
    fn parse_identifier() {
        let tests = vec![
            TestCase {
                input: "lhs",
                out: Some((ident("lhs"), "")),
            },
            TestCase {
                input: "a",
                out: Some((ident("a"), "")),
            },
            TestCase {
                input: "hello world",
                out: Some((ident("hello"), " world")),
            },
            TestCase {
                input: "hello=world",
                out: Some((ident("hello"), "=world")),
            },
            TestCase {
                input: "snake_case_2 ;",
                out: Some((ident("snake_case_2"), " ;")),
            },
            TestCase {
                input: "a__1b",
                out: Some((ident("a__1b"), "")),
            },
            TestCase {
                input: "_leading",
                out: None,
            },
            TestCase {
                input: "1abc",
                out: None,
            },
            TestCase {
                input: "",
                out: None,
            },
        ];

        assert_test_cases(identifier, tests);
    }

    #[test]
    fn parse_rule() {
        let tests = vec![
            TestCase {
                input: "lhs = rhs ;",
                out: Some((Rule::new(ident("lhs"), ident("rhs")), "")),
            },
            TestCase {
                input: "lhs=rhs;",
                out: Some((Rule::new(ident("lhs"), ident("rhs")), "")),
            },
            TestCase {
                input: "a\n=\tb\n;",
                out: Some((Rule::new(ident("a"), ident("b")), "")),
            },
            TestCase {
                input: "a = b; c = d;",
                out: Some((Rule::new(ident("a"), ident("b")), " c = d;")),
            },
            TestCase {
                input: "a = b",
                out: None,
            },
            TestCase {
                input: "a b ;",
                out: None,
            },
            TestCase {
                input: "a = ;",
                out: None,
            },
            TestCase {
                input: "= b ;",
                out: None,
            },
        ];

        assert_test_cases(rule, tests);
    }

    #[test]
    fn failed_rule_reports_furthest_failure() {
        let tests = vec![
            ("a = b", 5, "';'"),
            ("a b ;", 2, "'='"),
            ("a = ;", 4, "identifier"),
            ("a = b , c ;", 6, "';'"),
        ];
        for test in tests {
            let state = rule(State::new(test.0)).unwrap_err();
            assert_eq!(state.position(), 0);
            assert_eq!(
                state.furthest_failure(),
                Some(Failure {
                    pos: test.1,
                    expected: test.2
                }),
                "input: {:?}",
                test.0
            );
        }
    }

    #[test]
    fn parse_grammar() {
        let tests = vec![
            ("", vec![], ""),
            ("   \n\t ", vec![], ""),
            ("a = b;", vec![("a", "b")], ""),
            ("a = b; c = d;", vec![("a", "b"), ("c", "d")], ""),
            (
                "lhs = rhs ; foobar = barfoo ; ",
                vec![("lhs", "rhs"), ("foobar", "barfoo")],
                "",
            ),
            ("a = b ; c = ", vec![("a", "b")], "c = "),
            ("a = b ; !", vec![("a", "b")], "!"),
            ("oops", vec![], "oops"),
        ];
        for test in tests {
            let (state, grammar) = grammar(State::new(test.0));
            let got: Vec<(&str, &str)> = grammar
                .rules()
                .iter()
                .map(|rule| (rule.lhs().value(), rule.rhs().value()))
                .collect();
            assert_eq!(got, test.1, "input: {:?}", test.0);
            assert_eq!(state.rest(), test.2, "input: {:?}", test.0);
        }
    }
}
