#![allow(clippy::unwrap_used)]

//! Type expressions the way they show up in real docblocks, resolved
//! end to end.

use propdoc::typexpr::{Builtin, Type, TypeExprError, TypeResolver};
use rstest::rstest;

fn int() -> Type {
    Type::builtin(Builtin::Int)
}

fn string() -> Type {
    Type::builtin(Builtin::String)
}

#[test]
fn test_whitespace_inside_expressions_is_tolerated() {
    let resolver = TypeResolver::new();
    assert_eq!(
        resolver.resolve("array< int , string >").unwrap(),
        vec![Type::collection(Builtin::Array, Some(int()), Some(string()))]
    );
    assert_eq!(
        resolver.resolve("int | string").unwrap(),
        vec![int(), string()]
    );
}

#[test]
fn test_deeply_nested_expression() {
    let resolver = TypeResolver::new();
    let books = Type::collection(Builtin::Array, Some(int()), Some(Type::object(r"App\Book")));
    let inner = Type::collection(Builtin::Array, Some(string()), Some(books));
    assert_eq!(
        resolver.resolve(r"?array<int, array<string, \App\Book[]>>").unwrap(),
        vec![Type::collection(Builtin::Array, Some(int()), Some(inner)).with_nullable(true)]
    );
}

#[test]
fn test_grouped_union_under_list_suffix() {
    let resolver = TypeResolver::new();
    // The suffix applies to the whole group; the value slot takes the
    // union's first member
    assert_eq!(
        resolver.resolve("(int|string)[]").unwrap(),
        vec![Type::collection(Builtin::Array, Some(int()), Some(int()))]
    );
}

#[test]
fn test_bare_iterable_is_not_a_collection() {
    let resolver = TypeResolver::new();
    assert_eq!(
        resolver.resolve("iterable").unwrap(),
        vec![Type::builtin(Builtin::Iterable)]
    );
    assert_eq!(
        resolver.resolve("iterable<string>").unwrap(),
        vec![Type::collection(Builtin::Iterable, None, Some(string()))]
    );
}

#[rstest]
#[case("int", "int")]
#[case("?string", "?string")]
#[case(r"\App\Entity\Book", r"App\Entity\Book")]
#[case("string[]", "array[]")]
fn test_descriptor_display(#[case] input: &str, #[case] rendered: &str) {
    let types = TypeResolver::new().resolve(input).unwrap();
    assert_eq!(types[0].to_string(), rendered);
}

#[test]
fn test_error_reports_offending_token_and_offset() {
    let error = TypeResolver::new().resolve("int|%").unwrap_err();
    assert_eq!(
        error,
        TypeExprError::UnexpectedToken {
            text: "%".to_string(),
            offset: 4,
        }
    );
    assert_eq!(
        error.to_string(),
        "unexpected `%` at offset 4 in type expression"
    );
}

#[test]
fn test_truncated_expression_errors() {
    let resolver = TypeResolver::new();
    assert_eq!(resolver.resolve("int|").unwrap_err(), TypeExprError::UnexpectedEnd);
    assert_eq!(resolver.resolve("  ").unwrap_err(), TypeExprError::Empty);
}
