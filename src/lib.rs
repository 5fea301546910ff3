//! Recursive descent parser for EBNF grammars.
//!
//! ```
//! use ebnf::Parser;
//!
//! let grammar = Parser::new().parse("lhs = rhs ; foobar = barfoo ;");
//! assert_eq!(grammar.len(), 2);
//! assert_eq!(grammar.rules()[1].lhs().value(), "foobar");
//! ```

mod ast;
mod error;
pub mod parser;
mod symbol;

pub use ast::{Grammar, Identifier, Lhs, Rhs, Rule};
pub use error::{line_column, Error, Result};
pub use parser::{Mode, Options, Parser};
pub use symbol::Symbol;
