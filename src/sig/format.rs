//! Rendering of compact one-line signatures.

use crate::sig::{Callable, TypeInfo};

/// Render `callable` as a compact one-line signature.
///
/// The return type comes first (`void` when absent), then the name and
/// the parenthesised parameter list, comma-separated without spaces.
/// Type names are shortened by stripping the first matching entry of
/// `unwanted_prefixes`; precedence is list order and at most one
/// prefix is ever stripped. Names that match no prefix pass through
/// unchanged.
///
/// # Example
/// ```
/// use sigil::sig::{Callable, TypeInfo, signature_for};
///
/// let greet = Callable::new(
///     "greet",
///     Some(TypeInfo::named("java.lang.String")),
///     vec![TypeInfo::named("java.lang.String")],
/// );
/// assert_eq!(
///     signature_for(&greet, &["java.lang."]),
///     "String greet(String)"
/// );
/// ```
pub fn signature_for(callable: &Callable, unwanted_prefixes: &[&str]) -> String {
    let mut out = String::new();

    match &callable.return_type {
        None => out.push_str("void "),
        Some(ty) => {
            push_type_name(&mut out, ty, unwanted_prefixes);
            out.push(' ');
        }
    }

    out.push_str(&callable.name);
    out.push('(');
    if let Some((first, rest)) = callable.parameters.split_first() {
        push_type_name(&mut out, first, unwanted_prefixes);
        for ty in rest {
            out.push(',');
            push_type_name(&mut out, ty, unwanted_prefixes);
        }
    }
    out.push(')');
    out
}

/// Render a single type name, with prefix stripping and array suffix,
/// without a surrounding callable signature.
pub fn type_name_for(ty: &TypeInfo, unwanted_prefixes: &[&str]) -> String {
    let mut out = String::new();
    push_type_name(&mut out, ty, unwanted_prefixes);
    out
}

fn push_type_name(out: &mut String, ty: &TypeInfo, unwanted_prefixes: &[&str]) {
    out.push_str(strip_unwanted(ty.base_name(), unwanted_prefixes));
    if ty.is_array() {
        out.push_str("[]");
    }
}

/// Strip the first unwanted prefix that `name` starts with; first
/// match wins and no repeated stripping happens.
fn strip_unwanted<'a>(name: &'a str, unwanted_prefixes: &[&str]) -> &'a str {
    for prefix in unwanted_prefixes {
        if let Some(stripped) = name.strip_prefix(prefix) {
            return stripped;
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_no_parameters() {
        let run = Callable::new("run", None, Vec::new());
        assert_eq!(signature_for(&run, &[]), "void run()");
    }

    #[test]
    fn test_return_and_parameter_stripped() {
        let greet = Callable::new(
            "greet",
            Some(TypeInfo::named("java.lang.String")),
            vec![TypeInfo::named("java.lang.String")],
        );
        assert_eq!(
            signature_for(&greet, &["java.lang."]),
            "String greet(String)"
        );
    }

    #[test]
    fn test_array_parameter() {
        let fill = Callable::new(
            "fill",
            None,
            vec![TypeInfo::array_of(TypeInfo::named("int"))],
        );
        assert_eq!(signature_for(&fill, &[]), "void fill(int[])");
    }

    #[test]
    fn test_parameters_joined_by_comma() {
        let put = Callable::new(
            "put",
            Some(TypeInfo::named("boolean")),
            vec![
                TypeInfo::named("String"),
                TypeInfo::named("int"),
                TypeInfo::array_of(TypeInfo::named("byte")),
            ],
        );
        assert_eq!(signature_for(&put, &[]), "boolean put(String,int,byte[])");
    }

    #[test]
    fn test_first_prefix_wins() {
        // "java." comes first in the list, so the longer "java.lang."
        // never gets a chance to match.
        let ty = TypeInfo::named("java.lang.String");
        assert_eq!(type_name_for(&ty, &["java.", "java.lang."]), "lang.String");
        assert_eq!(type_name_for(&ty, &["java.lang.", "java."]), "String");
    }

    #[test]
    fn test_only_one_strip() {
        let ty = TypeInfo::named("a.a.Thing");
        assert_eq!(type_name_for(&ty, &["a."]), "a.Thing");
    }

    #[test]
    fn test_unknown_name_passes_through() {
        let ty = TypeInfo::named("com.example.Widget");
        assert_eq!(type_name_for(&ty, &["java.lang."]), "com.example.Widget");
    }

    #[test]
    fn test_array_strips_element_name() {
        let ty = TypeInfo::array_of(TypeInfo::named("java.lang.Object"));
        assert_eq!(type_name_for(&ty, &["java.lang."]), "Object[]");
    }
}
