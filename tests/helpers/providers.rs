//! Provider fixtures shared across the extraction suites.

use propdoc::extract::MagicPropertyExtractor;
use propdoc::provider::ClassRegistry;

use super::doc_fixtures::DUMMY_DOC;

pub const DUMMY: &str = "App\\Fixtures\\Dummy";
pub const PLAIN: &str = "App\\Fixtures\\Plain";
pub const BROKEN: &str = "App\\Fixtures\\Broken";
pub const MISSING: &str = "App\\Fixtures\\Missing";

/// The Dummy fixture, a class without any doc comment, and a class
/// whose comment is not a docblock. `MISSING` is reserved and never
/// registered.
pub fn fixture_registry() -> ClassRegistry {
    let mut registry = ClassRegistry::new();
    registry.register(DUMMY, DUMMY_DOC);
    registry.register_undocumented(PLAIN);
    registry.register(BROKEN, "/* stray block comment */");
    registry
}

pub fn fixture_extractor() -> MagicPropertyExtractor<ClassRegistry> {
    MagicPropertyExtractor::new(fixture_registry())
}

/// An extractor over a single class with the given doc comment.
pub fn extractor_for(class: &str, doc: &str) -> MagicPropertyExtractor<ClassRegistry> {
    let mut registry = ClassRegistry::new();
    registry.register(class, doc);
    MagicPropertyExtractor::new(registry)
}
