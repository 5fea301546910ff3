//! Proc macros for deriving rule enums from EBNF grammars.

use syn::{parse_macro_input, DeriveInput};

mod error;
mod generate;

/// Derive a `Rule` enum with one variant per rule defined in the grammar.
///
/// The grammar is given with exactly one of `#[ebnf_inline = "..."]` or
/// `#[ebnf_file = "path"]`, the path being relative to the crate root. The
/// annotated type gets a `SOURCE` constant holding the grammar text.
#[proc_macro_derive(Rules, attributes(ebnf_file, ebnf_inline))]
pub fn derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    generate::generate(ast)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
