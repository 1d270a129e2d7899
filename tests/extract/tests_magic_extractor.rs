#![allow(clippy::unwrap_used)]

//! Whole-pipeline queries against the shared Dummy fixture.

use propdoc::extract::{
    ExtractorContext, PropertyAccessExtractor, PropertyDescriptionExtractor,
    PropertyListExtractor, PropertyTypeExtractor,
};
use propdoc::typexpr::{Builtin, Type};
use rstest::rstest;

use crate::helpers::doc_fixtures::UNTYPED_WRITE_DOC;
use crate::helpers::providers::{DUMMY, extractor_for, fixture_extractor};

fn int() -> Type {
    Type::builtin(Builtin::Int)
}

fn string() -> Type {
    Type::builtin(Builtin::String)
}

fn string_array() -> Type {
    Type::collection(Builtin::Array, Some(int()), Some(string()))
}

#[rstest]
#[case("description", Some(vec![string()]))]
#[case("tags", Some(vec![string_array()]))]
#[case("foo", Some(vec![int()]))]
#[case("updatedAt", None)]
#[case("name", None)]
fn test_property_types(#[case] property: &str, #[case] expected: Option<Vec<Type>>) {
    let extractor = fixture_extractor();
    let context = ExtractorContext::new();
    assert_eq!(extractor.property_types(DUMMY, property, &context), expected);
}

#[rstest]
#[case("description", None)]
#[case("tags", Some("Array with tags"))]
#[case("foo", None)]
#[case("updatedAt", None)]
fn test_short_description(#[case] property: &str, #[case] expected: Option<&str>) {
    let extractor = fixture_extractor();
    let context = ExtractorContext::new();
    assert_eq!(
        extractor.short_description(DUMMY, property, &context).as_deref(),
        expected
    );
}

#[rstest]
#[case("description")]
#[case("tags")]
#[case("foo")]
#[case("updatedAt")]
fn test_long_description_equals_short(#[case] property: &str) {
    let extractor = fixture_extractor();
    let context = ExtractorContext::new();
    assert_eq!(
        extractor.long_description(DUMMY, property, &context),
        extractor.short_description(DUMMY, property, &context)
    );
}

#[rstest]
#[case("description", Some(true))]
#[case("tags", Some(true))]
#[case("foo", Some(false))]
#[case("updatedAt", None)]
fn test_is_readable(#[case] property: &str, #[case] expected: Option<bool>) {
    let extractor = fixture_extractor();
    let context = ExtractorContext::new();
    assert_eq!(extractor.is_readable(DUMMY, property, &context), expected);
}

#[rstest]
#[case("description", Some(true))]
#[case("tags", Some(false))]
#[case("foo", Some(true))]
#[case("updatedAt", None)]
fn test_is_writable(#[case] property: &str, #[case] expected: Option<bool>) {
    let extractor = fixture_extractor();
    let context = ExtractorContext::new();
    assert_eq!(extractor.is_writable(DUMMY, property, &context), expected);
}

#[test]
fn test_properties_lists_declared_names() {
    let extractor = fixture_extractor();
    let context = ExtractorContext::new();
    let names = extractor.properties(DUMMY, &context).unwrap();
    assert_eq!(names, ["description", "tags", "foo"]);
}

#[test]
fn test_untyped_declaration_has_no_type_opinion() {
    let extractor = extractor_for("App\\Draft", UNTYPED_WRITE_DOC);
    let context = ExtractorContext::new();

    assert_eq!(
        extractor.property_types("App\\Draft", "draft", &context),
        None
    );
    assert_eq!(
        extractor.is_writable("App\\Draft", "draft", &context),
        Some(true)
    );
    assert_eq!(
        extractor.is_readable("App\\Draft", "draft", &context),
        Some(false)
    );
    let names = extractor.properties("App\\Draft", &context).unwrap();
    assert_eq!(names, ["draft"]);
}

#[test]
fn test_mixed_is_an_opinion_with_no_descriptors() {
    let extractor = extractor_for("App\\Any", "/** @property mixed $anything */");
    let context = ExtractorContext::new();
    assert_eq!(
        extractor.property_types("App\\Any", "anything", &context),
        Some(vec![])
    );
}

#[test]
fn test_context_options_do_not_change_answers() {
    let extractor = fixture_extractor();
    let mut context = ExtractorContext::new();
    context.insert("serializer_groups", "admin");

    assert_eq!(extractor.is_readable(DUMMY, "tags", &context), Some(true));
    assert_eq!(
        extractor.property_types(DUMMY, "description", &context),
        Some(vec![string()])
    );
}
