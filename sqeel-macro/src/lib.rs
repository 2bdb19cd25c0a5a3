//! # sqeel-macro
//!
//! Procedural macros for `sqeel`. Use them through the `sqeel` crate, which
//! re-exports [`Model`](macro@Model).

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod derive_model;
mod types;

/// Derives `sqeel::Model` for a struct with named fields.
///
/// Every field becomes a column. Annotate fields with
/// `#[sqeel("type:INTEGER,primary")]` (or `#[sqeel = "..."]`); fields without
/// an annotation are passed to the describer with an empty one.
///
/// Also emits a `<struct_name>_fields` module with one string constant per
/// field holding its source name.
#[proc_macro_derive(Model, attributes(sqeel))]
pub fn model_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    derive_model::expand(ast).unwrap_or_else(syn::Error::into_compile_error).into()
}
