//! # propdoc
//!
//! Core library for extracting PHP magic property metadata from
//! `@property` doc comment tags.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! extract   → Extraction facets, MagicPropertyExtractor, chaining
//!   ↓
//! provider  → Class metadata: provider contract, registry, PHP scanner
//!   ↓
//! docblock  → Doc comment parser, DocBlock and tag model
//!   ↓
//! typexpr   → Type expression lexer, parser, resolver
//!   ↓
//! base      → Primitives (name aliases, identifier classes)
//! ```

// ============================================================================
// MODULES (dependency order: base → typexpr → docblock → provider → extract)
// ============================================================================

/// Foundation types: ClassName, PropertyName, identifier classes
pub mod base;

/// Type expressions: Logos lexer, recursive-descent parser, resolver
pub mod typexpr;

/// Doc comments: strict-frame parser, DocBlock and tag model
pub mod docblock;

/// Class metadata: provider contract, registry, directory scanner
pub mod provider;

/// Extraction: facet traits, MagicPropertyExtractor, first-opinion chain
pub mod extract;

// Re-export the extraction surface
pub use extract::{
    ExtractorChain, ExtractorContext, MagicPropertyExtractor, PropertyAccessExtractor,
    PropertyDescriptionExtractor, PropertyListExtractor, PropertyTypeExtractor,
};

// Re-export commonly needed items
pub use docblock::{DocBlock, DocBlockError, DocBlockParser, PropertyKind, PropertyTag};
pub use provider::{ClassMetadataProvider, ClassRegistry, ScanError, SourceScanner};
pub use typexpr::{Builtin, Type, TypeExprError, TypeResolver};

// Re-export foundation types
pub use base::{ClassName, PropertyName};
