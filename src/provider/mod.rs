//! Class metadata access: the provider contract, an in-memory
//! registry, and a directory scanner that fills one from PHP sources.

use std::sync::Arc;

pub mod error;
pub mod registry;
pub mod scanner;

pub use error::ScanError;
pub use registry::{ClassRecord, ClassRegistry};
pub use scanner::SourceScanner;

/// Where raw class metadata comes from.
///
/// The contract mirrors what runtime reflection answers: does this
/// class identifier resolve, and what raw doc comment does it carry.
/// `has_class` false means the identifier is unknown; `has_class` true
/// with `doc_comment` `None` means the class exists undocumented. The
/// two cases are distinct here even though metadata queries collapse
/// both into an absent answer.
pub trait ClassMetadataProvider {
    fn has_class(&self, class: &str) -> bool;

    /// The raw `/** ... */` comment on the class declaration, verbatim.
    fn doc_comment(&self, class: &str) -> Option<Arc<str>>;
}

impl<P: ClassMetadataProvider + ?Sized> ClassMetadataProvider for &P {
    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }

    fn doc_comment(&self, class: &str) -> Option<Arc<str>> {
        (**self).doc_comment(class)
    }
}

impl<P: ClassMetadataProvider + ?Sized> ClassMetadataProvider for Arc<P> {
    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }

    fn doc_comment(&self, class: &str) -> Option<Arc<str>> {
        (**self).doc_comment(class)
    }
}
