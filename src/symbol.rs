/// Terminal symbols of the EBNF notation.
///
/// Only `=` and `;` are used by the productions so far; the rest are reserved
/// for right-hand side constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    StartOption,
    EndOption,
    StartRepeat,
    EndRepeat,
    FirstQuote,
    SecondQuote,
    Definition,
    Alternation,
    Concatenation,
    Termination,
}

impl Symbol {
    pub fn as_char(self) -> char {
        match self {
            Symbol::StartOption => '[',
            Symbol::EndOption => ']',
            Symbol::StartRepeat => '{',
            Symbol::EndRepeat => '}',
            Symbol::FirstQuote => '\'',
            Symbol::SecondQuote => '"',
            Symbol::Definition => '=',
            Symbol::Alternation => '|',
            Symbol::Concatenation => ',',
            Symbol::Termination => ';',
        }
    }

    /// The symbol as it appears in parse errors.
    pub fn expected(self) -> &'static str {
        match self {
            Symbol::StartOption => "'['",
            Symbol::EndOption => "']'",
            Symbol::StartRepeat => "'{'",
            Symbol::EndRepeat => "'}'",
            Symbol::FirstQuote => "\"'\"",
            Symbol::SecondQuote => "'\"'",
            Symbol::Definition => "'='",
            Symbol::Alternation => "'|'",
            Symbol::Concatenation => "','",
            Symbol::Termination => "';'",
        }
    }
}
