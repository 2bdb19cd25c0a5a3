use quote::ToTokens;
use syn::{GenericArgument, Path, PathArguments, ReturnType, Type};

/// Renders a field type the way it is usually written in source
/// (e.g. `Option<DateTime<Utc>>`, `&'static str`, `[u8; 32]`).
///
/// Paths, references, slices, arrays, tuples and pointers are walked
/// structurally. Anything else (trait objects, `impl Trait`, fn pointers,
/// qualified paths) falls back to the token stream text.
pub fn type_to_string(ty: &Type) -> String {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => path_to_string(&type_path.path),
        Type::Reference(reference) => {
            let mut s = String::from("&");
            if let Some(lifetime) = &reference.lifetime {
                s.push_str(&lifetime.to_string());
                s.push(' ');
            }
            if reference.mutability.is_some() {
                s.push_str("mut ");
            }
            s.push_str(&type_to_string(&reference.elem));
            s
        }
        Type::Slice(slice) => format!("[{}]", type_to_string(&slice.elem)),
        Type::Array(array) => {
            format!("[{}; {}]", type_to_string(&array.elem), array.len.to_token_stream())
        }
        Type::Tuple(tuple) => {
            let elems: Vec<String> = tuple.elems.iter().map(type_to_string).collect();
            if elems.len() == 1 {
                format!("({},)", elems[0])
            } else {
                format!("({})", elems.join(", "))
            }
        }
        Type::Paren(paren) => format!("({})", type_to_string(&paren.elem)),
        Type::Group(group) => type_to_string(&group.elem),
        Type::Ptr(ptr) => {
            let kind = if ptr.mutability.is_some() { "mut" } else { "const" };
            format!("*{kind} {}", type_to_string(&ptr.elem))
        }
        Type::Never(_) => "!".to_string(),
        other => other.to_token_stream().to_string(),
    }
}

fn path_to_string(path: &Path) -> String {
    let segments: Vec<String> = path
        .segments
        .iter()
        .map(|segment| {
            let mut s = segment.ident.to_string();
            match &segment.arguments {
                PathArguments::None => {}
                PathArguments::AngleBracketed(args) => {
                    let args: Vec<String> = args.args.iter().map(generic_arg_to_string).collect();
                    s.push('<');
                    s.push_str(&args.join(", "));
                    s.push('>');
                }
                PathArguments::Parenthesized(args) => {
                    let inputs: Vec<String> = args.inputs.iter().map(type_to_string).collect();
                    s.push('(');
                    s.push_str(&inputs.join(", "));
                    s.push(')');
                    if let ReturnType::Type(_, output) = &args.output {
                        s.push_str(" -> ");
                        s.push_str(&type_to_string(output));
                    }
                }
            }
            s
        })
        .collect();

    let joined = segments.join("::");
    if path.leading_colon.is_some() { format!("::{joined}") } else { joined }
}

fn generic_arg_to_string(arg: &GenericArgument) -> String {
    match arg {
        GenericArgument::Type(ty) => type_to_string(ty),
        GenericArgument::Lifetime(lifetime) => lifetime.to_string(),
        GenericArgument::AssocType(assoc) => {
            format!("{} = {}", assoc.ident, type_to_string(&assoc.ty))
        }
        other => other.to_token_stream().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::type_to_string;
    use syn::{parse_quote, Type};

    fn render(ty: Type) -> String {
        type_to_string(&ty)
    }

    #[test]
    fn test_paths_and_generics() {
        assert_eq!(render(parse_quote!(i64)), "i64");
        assert_eq!(render(parse_quote!(Option<String>)), "Option<String>");
        assert_eq!(render(parse_quote!(Option<DateTime<Utc>>)), "Option<DateTime<Utc>>");
        assert_eq!(
            render(parse_quote!(chrono::DateTime<chrono::Utc>)),
            "chrono::DateTime<chrono::Utc>"
        );
        assert_eq!(render(parse_quote!(::std::string::String)), "::std::string::String");
        assert_eq!(render(parse_quote!(HashMap<String, Vec<u8>>)), "HashMap<String, Vec<u8>>");
    }

    #[test]
    fn test_references_arrays_and_tuples() {
        assert_eq!(render(parse_quote!(&'static str)), "&'static str");
        assert_eq!(render(parse_quote!(&mut [u8])), "&mut [u8]");
        assert_eq!(render(parse_quote!([u8; 32])), "[u8; 32]");
        assert_eq!(render(parse_quote!((i32, String))), "(i32, String)");
        assert_eq!(render(parse_quote!((i32,))), "(i32,)");
        assert_eq!(render(parse_quote!(())), "()");
        assert_eq!(render(parse_quote!(*const u8)), "*const u8");
    }
}
