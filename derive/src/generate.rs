use proc_macro2::{Span, TokenStream};
use quote::quote;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use syn::{Attribute, DeriveInput, Generics, Ident, Lit, Meta};

use ebnf::Grammar;

use crate::error::{DeriveError, Result};

const EBNF_FILE_ATTR: &str = "ebnf_file";
const EBNF_INLINE_ATTR: &str = "ebnf_inline";

/// Where the grammar text came from.
#[derive(Debug, PartialEq)]
enum GrammarSource {
    Inline(String),
    File { path: PathBuf, contents: String },
}

impl GrammarSource {
    fn text(&self) -> &str {
        match self {
            GrammarSource::Inline(s) => s,
            GrammarSource::File { contents, .. } => contents,
        }
    }
}

pub fn generate(ast: DeriveInput) -> Result<TokenStream> {
    let source = grammar_source(&ast)?;
    let grammar: Grammar = source.text().parse()?;

    let generated_rules = generate_rule_enum(&grammar)?;
    let generated_impl = generate_impl(&ast.ident, &ast.generics, &source);

    Ok(quote! {
        #generated_rules
        #generated_impl
    })
}

/// Load the grammar source from a derive attribute.
///
/// There must be exactly 1 attribute specifying the grammar source. The source
/// may either be written inline, or a path to an ebnf file relative to the
/// crate root.
fn grammar_source(ast: &DeriveInput) -> Result<GrammarSource> {
    let sources: Vec<&Attribute> = ast
        .attrs
        .iter()
        .filter(|attr| attr.path.is_ident(EBNF_FILE_ATTR) || attr.path.is_ident(EBNF_INLINE_ATTR))
        .collect();

    let source_attr = match sources.len() {
        0 => return Err(DeriveError::MissingGrammarSource),
        1 => sources[0],
        _ => return Err(DeriveError::MultipleGrammarSources),
    };

    match source_attr.parse_meta()? {
        Meta::NameValue(val) => match val.lit {
            Lit::Str(s) => {
                if val.path.is_ident(EBNF_FILE_ATTR) {
                    let root = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into());
                    let path = Path::new(&root).join(s.value());
                    let contents =
                        fs::read_to_string(&path).map_err(|e| DeriveError::ReadFile {
                            path: path.to_string_lossy().into_owned(),
                            reason: e.to_string(),
                        })?;
                    Ok(GrammarSource::File { path, contents })
                } else {
                    Ok(GrammarSource::Inline(s.value()))
                }
            }
            _ => Err(DeriveError::NotAString),
        },
        _ => Err(DeriveError::Other("attribute not a name value".to_owned())),
    }
}

/// Distinct rule names in the order they are first defined, each with every
/// rhs defined for it.
fn rule_definitions(grammar: &Grammar) -> Vec<(&str, Vec<&str>)> {
    let mut defs: Vec<(&str, Vec<&str>)> = Vec::new();
    for rule in grammar {
        let lhs = rule.lhs().value();
        let rhs = rule.rhs().value();
        match defs.iter_mut().find(|(name, _)| *name == lhs) {
            Some((_, alternatives)) => alternatives.push(rhs),
            None => defs.push((lhs, vec![rhs])),
        }
    }
    defs
}

/// Rule names that are Rust keywords are emitted as raw identifiers.
fn rule_ident(name: &str) -> Result<Ident> {
    match name {
        "self" | "Self" | "super" | "crate" => Err(DeriveError::ReservedName(name.to_owned())),
        _ if syn::parse_str::<Ident>(name).is_ok() => Ok(Ident::new(name, Span::call_site())),
        _ => Ok(Ident::new_raw(name, Span::call_site())),
    }
}

/// Generate enum variants for each rule.
fn generate_rule_enum(grammar: &Grammar) -> Result<TokenStream> {
    let defs = rule_definitions(grammar);

    let idents = defs
        .iter()
        .map(|(name, _)| rule_ident(name))
        .collect::<Result<Vec<Ident>>>()?;
    let names: Vec<&str> = defs.iter().map(|(name, _)| *name).collect();
    let rhs: Vec<&Vec<&str>> = defs.iter().map(|(_, rhs)| rhs).collect();

    Ok(quote! {
        #[allow(non_camel_case_types)]
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum Rule {
            #( #idents ),*
        }

        impl Rule {
            pub const ALL: &'static [Rule] = &[ #( Rule::#idents ),* ];

            pub fn name(self) -> &'static str {
                match self {
                    #( Rule::#idents => #names ),*
                }
            }

            pub fn rhs_names(self) -> &'static [&'static str] {
                match self {
                    #( Rule::#idents => &[ #( #rhs ),* ] ),*
                }
            }
        }
    })
}

/// Expose the grammar text on the derived type. File sources go through
/// `include_str!` so edits to the file trigger a rebuild.
fn generate_impl(name: &Ident, generics: &Generics, source: &GrammarSource) -> TokenStream {
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let text = match source {
        GrammarSource::Inline(s) => quote! { #s },
        GrammarSource::File { path, .. } => {
            let path = path.to_string_lossy().into_owned();
            quote! { include_str!(#path) }
        }
    };

    quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            pub const SOURCE: &'static str = #text;
        }
    }
}
