use std::fmt::{self, Display};
use std::slice;
use std::str::FromStr;

use crate::error::Error;
use crate::parser::{self, productions, Options, Parser};

/// A constant identifying production rules.
///
/// Always non-empty, starting with an ASCII letter followed by ASCII letters,
/// digits or underscores.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct Identifier(String);

impl Identifier {
    /// Callers must have already matched the identifier production.
    pub(crate) fn new_unchecked(value: String) -> Self {
        Identifier(value)
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Identifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_complete(s, productions::identifier)
    }
}

/// The lhs of a production rule.
pub type Lhs = Identifier;

/// The rhs of a production rule.
pub type Rhs = Identifier;

/// A production rule.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct Rule {
    lhs: Lhs,
    rhs: Rhs,
}

impl Rule {
    pub fn new(lhs: Lhs, rhs: Rhs) -> Self {
        Rule { lhs, rhs }
    }

    pub fn lhs(&self) -> &Lhs {
        &self.lhs
    }

    pub fn rhs(&self) -> &Rhs {
        &self.rhs
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {} ;", self.lhs, self.rhs)
    }
}

impl FromStr for Rule {
    type Err = Error;

    /// Parse exactly one rule. Surrounding whitespace is allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_complete(s, |state| {
            let state = productions::skip_whitespace(state);
            let (state, rule) = productions::rule(state)?;
            Ok((productions::skip_whitespace(state), rule))
        })
    }
}

/// A set of rules, in source order.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Grammar {
    rules: Vec<Rule>,
}

impl Grammar {
    pub fn new(rules: Vec<Rule>) -> Self {
        Grammar { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }
}

impl<'a> IntoIterator for &'a Grammar {
    type Item = &'a Rule;
    type IntoIter = slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{}", rule)?;
        }
        Ok(())
    }
}

impl FromStr for Grammar {
    type Err = Error;

    /// Parse a grammar, rejecting anything after the last rule.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::with_options(Options::strict()).try_parse(s)
    }
}
