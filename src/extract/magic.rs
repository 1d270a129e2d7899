//! Magic property extraction from class doc comments.
//!
//! [`MagicPropertyExtractor`] answers every facet from the
//! `@property` / `@property-read` / `@property-write` tags on a class.
//! The class's doc comment is fetched from a [`ClassMetadataProvider`],
//! parsed once, and cached for the life of the extractor; classes are
//! assumed immutable for the process, so nothing is ever evicted and a
//! failed lookup or parse is cached as absent and never retried.
//!
//! Queries never fail. A class the provider does not know, a class
//! without a comment, a comment the parser rejects, and a property no
//! tag declares all come out as `None`.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::base::{ClassName, PropertyName};
use crate::docblock::{DocBlock, DocBlockParser, PropertyKind, PropertyTag};
use crate::provider::ClassMetadataProvider;
use crate::typexpr::{Type, TypeResolver};

use super::context::ExtractorContext;
use super::{
    PropertyAccessExtractor, PropertyDescriptionExtractor, PropertyListExtractor,
    PropertyTypeExtractor,
};

/// Extracts property metadata declared through magic `@property` tags.
pub struct MagicPropertyExtractor<P> {
    provider: P,
    parser: DocBlockParser,
    resolver: TypeResolver,
    cache: RwLock<FxHashMap<ClassName, Option<Arc<DocBlock>>>>,
}

impl<P: ClassMetadataProvider> MagicPropertyExtractor<P> {
    pub fn new(provider: P) -> MagicPropertyExtractor<P> {
        MagicPropertyExtractor {
            provider,
            parser: DocBlockParser::new(),
            resolver: TypeResolver::new(),
            cache: RwLock::default(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Cached doc block lookup. On a miss the comment is parsed outside
    /// any lock; if two threads race, the first insert wins and the
    /// loser's parse is discarded, so every caller observes the same
    /// `Arc` per class for the extractor's lifetime.
    fn doc_block(&self, class: &str) -> Option<Arc<DocBlock>> {
        if let Some(cached) = self.cache.read().get(class) {
            return cached.clone();
        }

        let loaded = self.load_doc_block(class);
        self.cache
            .write()
            .entry(ClassName::new(class))
            .or_insert(loaded)
            .clone()
    }

    fn load_doc_block(&self, class: &str) -> Option<Arc<DocBlock>> {
        if !self.provider.has_class(class) {
            trace!(class, "class unknown to provider");
            return None;
        }
        let Some(comment) = self.provider.doc_comment(class) else {
            trace!(class, "class has no doc comment");
            return None;
        };
        match self.parser.parse(&comment) {
            Ok(block) => Some(Arc::new(block)),
            Err(error) => {
                debug!(class, %error, "rejecting malformed doc comment");
                None
            }
        }
    }

    /// Whether the property appears in the [`properties`] view. Types
    /// and access answers go through this gate, descriptions do not.
    ///
    /// [`properties`]: PropertyListExtractor::properties
    fn listed_property(&self, class: &str, property: &str, context: &ExtractorContext) -> bool {
        self.properties(class, context)
            .is_some_and(|names| names.iter().any(|name| name.as_str() == property))
    }

    fn declared_with(
        &self,
        class: &str,
        property: &str,
        context: &ExtractorContext,
        kinds: [PropertyKind; 2],
    ) -> Option<bool> {
        let block = self.doc_block(class)?;
        if !self.listed_property(class, property, context) {
            return None;
        }
        let declared = kinds.into_iter().any(|kind| {
            block
                .property_tags_of(kind)
                .any(|tag| tag.name.as_str() == property)
        });
        Some(declared)
    }
}

impl<P: ClassMetadataProvider> PropertyTypeExtractor for MagicPropertyExtractor<P> {
    fn property_types(
        &self,
        class: &str,
        property: &str,
        context: &ExtractorContext,
    ) -> Option<Vec<Type>> {
        let block = self.doc_block(class)?;
        if !self.listed_property(class, property, context) {
            return None;
        }
        let tag = magic_tags(&block)
            .into_iter()
            .find(|tag| tag.name.as_str() == property)?;
        // A declaration without a type expression has no type opinion
        let expr = tag.type_expr.as_ref()?;
        Some(self.resolver.lower(expr))
    }
}

impl<P: ClassMetadataProvider> PropertyDescriptionExtractor for MagicPropertyExtractor<P> {
    /// The first tag whose name matches decides: its description or
    /// nothing. A later same-named tag is never consulted.
    fn short_description(
        &self,
        class: &str,
        property: &str,
        context: &ExtractorContext,
    ) -> Option<String> {
        let _ = context;
        let block = self.doc_block(class)?;
        let tag = magic_tags(&block)
            .into_iter()
            .find(|tag| tag.name.as_str() == property)?;
        tag.description.clone()
    }

    /// Property tags carry a single free-text field, so the long form
    /// is the short form.
    fn long_description(
        &self,
        class: &str,
        property: &str,
        context: &ExtractorContext,
    ) -> Option<String> {
        self.short_description(class, property, context)
    }
}

impl<P: ClassMetadataProvider> PropertyAccessExtractor for MagicPropertyExtractor<P> {
    /// `Some(false)` for a property declared only write-only; `None`
    /// only when the class or property is unknown.
    fn is_readable(
        &self,
        class: &str,
        property: &str,
        context: &ExtractorContext,
    ) -> Option<bool> {
        self.declared_with(
            class,
            property,
            context,
            [PropertyKind::ReadWrite, PropertyKind::ReadOnly],
        )
    }

    fn is_writable(
        &self,
        class: &str,
        property: &str,
        context: &ExtractorContext,
    ) -> Option<bool> {
        self.declared_with(
            class,
            property,
            context,
            [PropertyKind::ReadWrite, PropertyKind::WriteOnly],
        )
    }
}

impl<P: ClassMetadataProvider> PropertyListExtractor for MagicPropertyExtractor<P> {
    /// Every declared name, duplicates included when one name appears
    /// under several tag kinds, ranked by first occurrence in the raw
    /// comment.
    fn properties(&self, class: &str, context: &ExtractorContext) -> Option<Vec<PropertyName>> {
        let _ = context;
        let block = self.doc_block(class)?;
        let names = magic_tags(&block)
            .into_iter()
            .map(|tag| tag.name.clone())
            .collect();
        Some(rank_by_source_position(names, block.source()))
    }
}

/// All property tags grouped by kind: every `@property`, then every
/// `@property-read`, then every `@property-write`, each group in source
/// order. First-match lookups depend on exactly this concatenation, so
/// a read-write declaration shadows a same-named read-only or
/// write-only one wherever it sits in the comment.
fn magic_tags(block: &DocBlock) -> Vec<&PropertyTag> {
    PropertyKind::ALL
        .iter()
        .flat_map(|&kind| block.property_tags_of(kind))
        .collect()
}

/// Rank names by the byte position where each first occurs in the raw
/// comment, ascending. The scan is a bare substring search, so a name
/// also mentioned in the summary outranks its own declaration, and a
/// name not found at all ranks first. Ties keep their incoming order.
/// Tags carry their declaration span for ranking by position of the
/// declaration itself instead.
fn rank_by_source_position(names: Vec<PropertyName>, source: &str) -> Vec<PropertyName> {
    let mut ranked: Vec<(usize, PropertyName)> = names
        .into_iter()
        .map(|name| (source.find(name.as_str()).unwrap_or(0), name))
        .collect();
    ranked.sort_by_key(|(position, _)| *position);
    ranked.into_iter().map(|(_, name)| name).collect()
}
