//! Property metadata extraction.
//!
//! Four narrow trait facets cover the questions callers ask about a
//! class property: its types, its doc text, whether it can be read or
//! written, and which properties exist at all. `None` is the uniform
//! "this extractor has no opinion" answer on every facet, distinct
//! from any concrete negative (`Some(false)`, an empty list, an empty
//! string never stand in for it). That keeps extractors composable:
//! [`ExtractorChain`] asks each registered extractor in turn and takes
//! the first opinion.
//!
//! [`MagicPropertyExtractor`] is the facet implementation this crate is
//! about: it answers all four from `@property` doc tags.

use std::sync::Arc;

pub mod chain;
pub mod context;
pub mod magic;

pub use chain::ExtractorChain;
pub use context::ExtractorContext;
pub use magic::MagicPropertyExtractor;

use crate::base::PropertyName;
use crate::typexpr::Type;

/// Resolved types a property can hold.
pub trait PropertyTypeExtractor {
    /// `Some(vec![])` is a valid opinion: the property is declared but
    /// its type carries no descriptor information.
    fn property_types(
        &self,
        class: &str,
        property: &str,
        context: &ExtractorContext,
    ) -> Option<Vec<Type>>;
}

/// Human-readable property documentation.
pub trait PropertyDescriptionExtractor {
    fn short_description(
        &self,
        class: &str,
        property: &str,
        context: &ExtractorContext,
    ) -> Option<String>;

    fn long_description(
        &self,
        class: &str,
        property: &str,
        context: &ExtractorContext,
    ) -> Option<String>;
}

/// Whether a property can be read or written.
pub trait PropertyAccessExtractor {
    fn is_readable(&self, class: &str, property: &str, context: &ExtractorContext)
    -> Option<bool>;

    fn is_writable(&self, class: &str, property: &str, context: &ExtractorContext)
    -> Option<bool>;
}

/// Which properties a class has.
pub trait PropertyListExtractor {
    fn properties(&self, class: &str, context: &ExtractorContext) -> Option<Vec<PropertyName>>;
}

impl<T: PropertyTypeExtractor + ?Sized> PropertyTypeExtractor for Arc<T> {
    fn property_types(
        &self,
        class: &str,
        property: &str,
        context: &ExtractorContext,
    ) -> Option<Vec<Type>> {
        (**self).property_types(class, property, context)
    }
}

impl<T: PropertyDescriptionExtractor + ?Sized> PropertyDescriptionExtractor for Arc<T> {
    fn short_description(
        &self,
        class: &str,
        property: &str,
        context: &ExtractorContext,
    ) -> Option<String> {
        (**self).short_description(class, property, context)
    }

    fn long_description(
        &self,
        class: &str,
        property: &str,
        context: &ExtractorContext,
    ) -> Option<String> {
        (**self).long_description(class, property, context)
    }
}

impl<T: PropertyAccessExtractor + ?Sized> PropertyAccessExtractor for Arc<T> {
    fn is_readable(
        &self,
        class: &str,
        property: &str,
        context: &ExtractorContext,
    ) -> Option<bool> {
        (**self).is_readable(class, property, context)
    }

    fn is_writable(
        &self,
        class: &str,
        property: &str,
        context: &ExtractorContext,
    ) -> Option<bool> {
        (**self).is_writable(class, property, context)
    }
}

impl<T: PropertyListExtractor + ?Sized> PropertyListExtractor for Arc<T> {
    fn properties(&self, class: &str, context: &ExtractorContext) -> Option<Vec<PropertyName>> {
        (**self).properties(class, context)
    }
}
