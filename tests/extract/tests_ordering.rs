#![allow(clippy::unwrap_used)]

//! Listing order: names grouped by tag kind, then re-ranked by where
//! each first occurs in the raw comment.

use propdoc::extract::{
    ExtractorContext, PropertyAccessExtractor, PropertyDescriptionExtractor,
    PropertyListExtractor, PropertyTypeExtractor,
};
use propdoc::typexpr::{Builtin, Type};
use proptest::prelude::*;

use crate::helpers::doc_fixtures::{
    DUPLICATE_NAME_DOC, SHADOWED_STATUS_DOC, SUMMARY_MENTIONS_TAGS_DOC,
};
use crate::helpers::providers::extractor_for;

#[test]
fn test_summary_mention_outranks_declaration_order() {
    let extractor = extractor_for("App\\Post", SUMMARY_MENTIONS_TAGS_DOC);
    let context = ExtractorContext::new();
    let names = extractor.properties("App\\Post", &context).unwrap();
    // `tags` is declared last but mentioned in the summary first
    assert_eq!(names, ["tags", "title"]);
}

#[test]
fn test_duplicate_name_is_listed_once_per_kind() {
    let extractor = extractor_for("App\\Dup", DUPLICATE_NAME_DOC);
    let context = ExtractorContext::new();
    let names = extractor.properties("App\\Dup", &context).unwrap();
    assert_eq!(names, ["value", "value"]);
}

#[test]
fn test_duplicate_name_reads_and_writes() {
    let extractor = extractor_for("App\\Dup", DUPLICATE_NAME_DOC);
    let context = ExtractorContext::new();
    assert_eq!(extractor.is_readable("App\\Dup", "value", &context), Some(true));
    assert_eq!(extractor.is_writable("App\\Dup", "value", &context), Some(true));
}

#[test]
fn test_read_write_kind_wins_first_match() {
    let extractor = extractor_for("App\\Job", SHADOWED_STATUS_DOC);
    let context = ExtractorContext::new();

    // The bare @property declaration is consulted first even though the
    // described @property-read one comes first in the comment
    assert_eq!(
        extractor.short_description("App\\Job", "status", &context),
        None
    );
    assert_eq!(
        extractor.property_types("App\\Job", "status", &context),
        Some(vec![Type::builtin(Builtin::String)])
    );
    assert_eq!(extractor.is_readable("App\\Job", "status", &context), Some(true));
    assert_eq!(extractor.is_writable("App\\Job", "status", &context), Some(true));
}

proptest! {
    // Names carry a digit so they cannot collide with tag keywords, and
    // a fixed length so no name is a substring of another
    #[test]
    fn prop_listing_follows_first_occurrence(
        names in prop::collection::hash_set("[a-z]{3}[0-9][a-z]{2}", 1..8)
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let mut doc = String::from("/**\n");
        for name in &names {
            let kind = match name.as_bytes()[3] % 3 {
                0 => "property",
                1 => "property-read",
                _ => "property-write",
            };
            doc.push_str(" * @");
            doc.push_str(kind);
            doc.push_str(" int $");
            doc.push_str(name);
            doc.push('\n');
        }
        doc.push_str(" */");

        let extractor = extractor_for("App\\Generated", &doc);
        let context = ExtractorContext::new();
        let listed = extractor.properties("App\\Generated", &context).unwrap();
        prop_assert_eq!(listed, names);
    }
}
