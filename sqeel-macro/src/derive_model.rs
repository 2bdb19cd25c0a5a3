use std::collections::HashSet;

use heck::{ToShoutySnakeCase, ToSnakeCase};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Expr, ExprLit, Fields, Lit, LitStr, Meta};

use crate::types::type_to_string;

/// Expands the `#[derive(Model)]` macro.
///
/// This function reads the struct fields and their `#[sqeel(...)]` annotations to generate:
/// 1. A `FieldInfo` entry per field, in declaration order.
/// 2. The `impl Model` block with `struct_name` and `fields`.
/// 3. A `<struct>_fields` module of source-name constants. When two fields
///    map to the same constant name (`UserId` and `user_id`), only the first
///    gets one.
pub fn expand(ast: DeriveInput) -> syn::Result<TokenStream> {
    let struct_name = &ast.ident;
    let vis = &ast.vis;

    let fields = match &ast.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => return Err(syn::Error::new_spanned(struct_name, "Model must have named fields")),
        },
        _ => return Err(syn::Error::new_spanned(struct_name, "Model must be a struct")),
    };

    let mut field_infos = Vec::with_capacity(fields.len());
    let mut field_consts = Vec::with_capacity(fields.len());
    let mut const_names = HashSet::new();

    for f in fields {
        let Some(ident) = &f.ident else { continue };
        let ident_str = ident.to_string();
        let name = ident_str.strip_prefix("r#").unwrap_or(&ident_str);
        let type_name = type_to_string(&f.ty);
        let tag = sqeel_tag(&f.attrs)?.map(|lit| lit.value()).unwrap_or_default();

        field_infos.push(quote! {
            ::sqeel::FieldInfo {
                name: #name,
                type_name: #type_name,
                tag: #tag,
            }
        });

        let shouty = name.to_shouty_snake_case();
        if !shouty.is_empty() && const_names.insert(shouty.clone()) {
            let const_name = format_ident!("{}", shouty);
            field_consts.push(quote! {
                pub const #const_name: &str = #name;
            });
        }
    }

    let fields_mod = format_ident!("{}_fields", struct_name.to_string().to_snake_case());
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::sqeel::Model for #struct_name #ty_generics #where_clause {
            fn struct_name() -> &'static str {
                stringify!(#struct_name)
            }

            fn fields() -> Vec<::sqeel::FieldInfo> {
                vec![#(#field_infos),*]
            }
        }

        #[allow(dead_code)]
        #vis mod #fields_mod {
            #(#field_consts)*
        }
    })
}

/// Returns the annotation of a field, accepting both `#[sqeel("...")]`
/// and `#[sqeel = "..."]`.
fn sqeel_tag(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut tag = None;

    for attr in attrs.iter().filter(|a| a.path().is_ident("sqeel")) {
        if tag.is_some() {
            return Err(syn::Error::new_spanned(attr, "duplicate sqeel attribute"));
        }

        let lit = match &attr.meta {
            Meta::List(_) => attr.parse_args::<LitStr>()?,
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) => s.clone(),
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "sqeel annotation must be a string literal",
                    ));
                }
            },
            Meta::Path(_) => {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected #[sqeel(\"...\")] or #[sqeel = \"...\"]",
                ));
            }
        };
        tag = Some(lit);
    }

    Ok(tag)
}
