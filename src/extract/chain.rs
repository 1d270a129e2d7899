//! First-opinion-wins extractor composition.

use crate::base::PropertyName;
use crate::typexpr::Type;

use super::context::ExtractorContext;
use super::{
    PropertyAccessExtractor, PropertyDescriptionExtractor, PropertyListExtractor,
    PropertyTypeExtractor,
};

/// Asks registered extractors in order and returns the first answer
/// that is not `None`.
///
/// Each facet has its own list, so one extractor can serve several
/// facets (register an `Arc` clone per facet) and facets can be backed
/// by different extractors entirely.
#[derive(Default)]
pub struct ExtractorChain {
    types: Vec<Box<dyn PropertyTypeExtractor + Send + Sync>>,
    descriptions: Vec<Box<dyn PropertyDescriptionExtractor + Send + Sync>>,
    access: Vec<Box<dyn PropertyAccessExtractor + Send + Sync>>,
    lists: Vec<Box<dyn PropertyListExtractor + Send + Sync>>,
}

impl ExtractorChain {
    pub fn new() -> ExtractorChain {
        ExtractorChain::default()
    }

    pub fn with_types(
        mut self,
        extractor: impl PropertyTypeExtractor + Send + Sync + 'static,
    ) -> ExtractorChain {
        self.types.push(Box::new(extractor));
        self
    }

    pub fn with_descriptions(
        mut self,
        extractor: impl PropertyDescriptionExtractor + Send + Sync + 'static,
    ) -> ExtractorChain {
        self.descriptions.push(Box::new(extractor));
        self
    }

    pub fn with_access(
        mut self,
        extractor: impl PropertyAccessExtractor + Send + Sync + 'static,
    ) -> ExtractorChain {
        self.access.push(Box::new(extractor));
        self
    }

    pub fn with_lists(
        mut self,
        extractor: impl PropertyListExtractor + Send + Sync + 'static,
    ) -> ExtractorChain {
        self.lists.push(Box::new(extractor));
        self
    }
}

impl PropertyTypeExtractor for ExtractorChain {
    fn property_types(
        &self,
        class: &str,
        property: &str,
        context: &ExtractorContext,
    ) -> Option<Vec<Type>> {
        self.types
            .iter()
            .find_map(|extractor| extractor.property_types(class, property, context))
    }
}

impl PropertyDescriptionExtractor for ExtractorChain {
    fn short_description(
        &self,
        class: &str,
        property: &str,
        context: &ExtractorContext,
    ) -> Option<String> {
        self.descriptions
            .iter()
            .find_map(|extractor| extractor.short_description(class, property, context))
    }

    fn long_description(
        &self,
        class: &str,
        property: &str,
        context: &ExtractorContext,
    ) -> Option<String> {
        self.descriptions
            .iter()
            .find_map(|extractor| extractor.long_description(class, property, context))
    }
}

impl PropertyAccessExtractor for ExtractorChain {
    fn is_readable(
        &self,
        class: &str,
        property: &str,
        context: &ExtractorContext,
    ) -> Option<bool> {
        self.access
            .iter()
            .find_map(|extractor| extractor.is_readable(class, property, context))
    }

    fn is_writable(
        &self,
        class: &str,
        property: &str,
        context: &ExtractorContext,
    ) -> Option<bool> {
        self.access
            .iter()
            .find_map(|extractor| extractor.is_writable(class, property, context))
    }
}

impl PropertyListExtractor for ExtractorChain {
    fn properties(&self, class: &str, context: &ExtractorContext) -> Option<Vec<PropertyName>> {
        self.lists
            .iter()
            .find_map(|extractor| extractor.properties(class, context))
    }
}
