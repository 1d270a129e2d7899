#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Scanning directories of PHP sources into a registry.

use std::fs;

use propdoc::MagicPropertyExtractor;
use propdoc::extract::{ExtractorContext, PropertyListExtractor, PropertyTypeExtractor};
use propdoc::provider::{ScanError, SourceScanner};
use propdoc::typexpr::{Builtin, Type};
use tempfile::TempDir;

const BOOK_PHP: &str = r"<?php
namespace App\Entity;

/**
 * A catalogued book.
 *
 * @property string $title
 * @property-read string[] $authors All credited authors
 */
class Book {}
";

fn write(dir: &TempDir, rel: &str, content: &str) {
    let path = dir.path().join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create directories");
    }
    fs::write(&path, content).expect("Failed to write test file");
}

#[test]
fn test_scan_finds_classes_recursively_and_skips_other_files() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write(&dir, "src/Book.php", BOOK_PHP);
    write(
        &dir,
        "src/Sub/Tag.php",
        "<?php\nnamespace App\\Entity;\nclass Tag {}\n",
    );
    write(&dir, "notes.txt", "class NotPhp {}");

    let registry = SourceScanner::new().scan_directory(dir.path()).unwrap();

    assert_eq!(registry.len(), 2);
    assert!(registry.get("App\\Entity\\Book").unwrap().doc().is_some());
    assert!(registry.get("App\\Entity\\Tag").unwrap().doc().is_none());
    assert!(!registry.contains("NotPhp"));
}

#[test]
fn test_registration_order_follows_sorted_paths() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write(&dir, "zebra.php", "<?php class Zebra {}\n");
    write(&dir, "alpha.php", "<?php class Alpha {}\n");
    write(&dir, "mid/beta.php", "<?php class Beta {}\n");

    let registry = SourceScanner::new().scan_directory(dir.path()).unwrap();
    let names: Vec<_> = registry.class_names().map(|n| n.as_str()).collect();
    assert_eq!(names, ["Alpha", "Beta", "Zebra"]);
}

#[test]
fn test_scanned_file_path_is_recorded() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write(&dir, "src/Book.php", BOOK_PHP);

    let registry = SourceScanner::new().scan_directory(dir.path()).unwrap();
    let record = registry.get("App\\Entity\\Book").unwrap();
    assert!(record.file().unwrap().ends_with("src/Book.php"));
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let missing = dir.path().join("nope");

    let error = SourceScanner::new().scan_directory(&missing).unwrap_err();
    assert!(matches!(error, ScanError::NotADirectory(_)));
}

#[test]
fn test_scan_into_keeps_existing_registrations() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write(&dir, "Book.php", BOOK_PHP);

    let mut registry = propdoc::ClassRegistry::new();
    registry.register("App\\Handwritten", "/** @property int $n */");
    SourceScanner::new()
        .scan_into(dir.path(), &mut registry)
        .unwrap();

    assert!(registry.contains("App\\Handwritten"));
    assert!(registry.contains("App\\Entity\\Book"));
}

#[test]
fn test_scanned_sources_answer_queries_end_to_end() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write(&dir, "src/Book.php", BOOK_PHP);

    let registry = SourceScanner::new().scan_directory(dir.path()).unwrap();
    let extractor = MagicPropertyExtractor::new(registry);
    let context = ExtractorContext::new();

    let names = extractor.properties("App\\Entity\\Book", &context).unwrap();
    assert_eq!(names, ["title", "authors"]);
    assert_eq!(
        extractor.property_types("App\\Entity\\Book", "authors", &context),
        Some(vec![Type::collection(
            Builtin::Array,
            Some(Type::builtin(Builtin::Int)),
            Some(Type::builtin(Builtin::String)),
        )])
    );
}

#[test]
fn test_failed_scan_reports_every_file() {
    let error = ScanError::Failed {
        count: 2,
        details: vec!["a.php: boom".to_string(), "b.php: nope".to_string()],
    };
    assert_eq!(
        error.to_string(),
        "failed to scan 2 file(s):\n  a.php: boom\n  b.php: nope"
    );
}
