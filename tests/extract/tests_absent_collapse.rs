//! Every failure collapses to an absent answer, on every facet.

use propdoc::extract::{
    ExtractorContext, MagicPropertyExtractor, PropertyAccessExtractor,
    PropertyDescriptionExtractor, PropertyListExtractor, PropertyTypeExtractor,
};
use propdoc::provider::ClassRegistry;
use rstest::rstest;

use crate::helpers::doc_fixtures::SHAPE_TYPE_DOC;
use crate::helpers::providers::{BROKEN, DUMMY, MISSING, PLAIN, extractor_for, fixture_extractor};

fn assert_all_absent(
    extractor: &MagicPropertyExtractor<ClassRegistry>,
    class: &str,
    property: &str,
) {
    let context = ExtractorContext::new();
    assert_eq!(extractor.property_types(class, property, &context), None);
    assert_eq!(extractor.short_description(class, property, &context), None);
    assert_eq!(extractor.long_description(class, property, &context), None);
    assert_eq!(extractor.is_readable(class, property, &context), None);
    assert_eq!(extractor.is_writable(class, property, &context), None);
    assert_eq!(extractor.properties(class, &context), None);
}

#[test]
fn test_unknown_class() {
    assert_all_absent(&fixture_extractor(), MISSING, "description");
}

#[test]
fn test_class_without_doc_comment() {
    assert_all_absent(&fixture_extractor(), PLAIN, "description");
}

#[test]
fn test_comment_that_is_not_a_docblock() {
    assert_all_absent(&fixture_extractor(), BROKEN, "description");
}

#[test]
fn test_bad_type_expression_rejects_the_whole_comment() {
    let extractor = extractor_for("App\\Shape", SHAPE_TYPE_DOC);
    // The valid sibling tag goes down with the bad one
    assert_all_absent(&extractor, "App\\Shape", "ok");
    assert_all_absent(&extractor, "App\\Shape", "shape");
}

#[test]
fn test_undeclared_property_on_documented_class() {
    let extractor = fixture_extractor();
    let context = ExtractorContext::new();

    assert_eq!(extractor.property_types(DUMMY, "nope", &context), None);
    assert_eq!(extractor.short_description(DUMMY, "nope", &context), None);
    assert_eq!(extractor.is_readable(DUMMY, "nope", &context), None);
    assert_eq!(extractor.is_writable(DUMMY, "nope", &context), None);
    // The class itself still answers
    assert!(extractor.properties(DUMMY, &context).is_some());
}

#[rstest]
#[case("")]
#[case("$description")]
#[case("Description")]
fn test_lookup_is_exact(#[case] property: &str) {
    let extractor = fixture_extractor();
    let context = ExtractorContext::new();

    assert_eq!(extractor.property_types(DUMMY, property, &context), None);
    assert_eq!(extractor.short_description(DUMMY, property, &context), None);
    assert_eq!(extractor.is_readable(DUMMY, property, &context), None);
    assert_eq!(extractor.is_writable(DUMMY, property, &context), None);
}
