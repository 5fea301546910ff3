use proc_macro2::{Span, TokenStream};
use std::fmt::{self, Display};

pub type Result<T> = std::result::Result<T, DeriveError>;

#[derive(Debug, Clone, PartialEq)]
pub enum DeriveError {
    MissingGrammarSource,
    MultipleGrammarSources,
    NotAString,
    ReadFile { path: String, reason: String },
    Grammar(ebnf::Error),
    ReservedName(String),
    Other(String),
}

impl DeriveError {
    pub fn to_compile_error(&self) -> TokenStream {
        syn::Error::new(Span::call_site(), self).to_compile_error()
    }
}

impl Display for DeriveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DeriveError::MissingGrammarSource => write!(f, "No grammar source provided"),
            DeriveError::MultipleGrammarSources => {
                write!(f, "At most one grammar source can be provided")
            }
            DeriveError::NotAString => write!(f, "Grammar source must be a string literal"),
            DeriveError::ReadFile {
                ref path,
                ref reason,
            } => write!(f, "Failed to read ebnf file {}: {}", path, reason),
            DeriveError::Grammar(ref err) => write!(f, "Invalid grammar: {}", err),
            DeriveError::ReservedName(ref name) => {
                write!(f, "Rule name '{}' can't be used as an identifier", name)
            }
            DeriveError::Other(ref s) => write!(f, "Derive error: {}", s),
        }
    }
}

impl From<syn::Error> for DeriveError {
    fn from(e: syn::Error) -> DeriveError {
        DeriveError::Other(format!("syn error: {}", e))
    }
}

impl From<ebnf::Error> for DeriveError {
    fn from(e: ebnf::Error) -> DeriveError {
        DeriveError::Grammar(e)
    }
}
