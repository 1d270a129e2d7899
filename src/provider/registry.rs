//! In-memory class metadata registry.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::base::ClassName;

use super::ClassMetadataProvider;

/// What is known about one class: its raw doc comment, if any, and the
/// file it came from when a scanner produced it.
#[derive(Debug, Clone)]
pub struct ClassRecord {
    doc: Option<Arc<str>>,
    file: Option<PathBuf>,
}

impl ClassRecord {
    pub fn documented(doc: impl Into<Arc<str>>) -> ClassRecord {
        ClassRecord {
            doc: Some(doc.into()),
            file: None,
        }
    }

    /// The class exists but carries no doc comment.
    pub fn undocumented() -> ClassRecord {
        ClassRecord {
            doc: None,
            file: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> ClassRecord {
        self.file = Some(file.into());
        self
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

/// Class name to record mapping, iteration in registration order.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: IndexMap<ClassName, ClassRecord>,
}

impl ClassRegistry {
    pub fn new() -> ClassRegistry {
        ClassRegistry::default()
    }

    /// Register a class with its raw doc comment.
    pub fn register(&mut self, name: impl Into<ClassName>, doc: impl Into<Arc<str>>) {
        self.insert(name.into(), ClassRecord::documented(doc));
    }

    /// Register a class that has no doc comment. Queries will see the
    /// class as present and its documentation as absent.
    pub fn register_undocumented(&mut self, name: impl Into<ClassName>) {
        self.insert(name.into(), ClassRecord::undocumented());
    }

    /// Re-registering a name replaces its record but keeps its position.
    pub fn insert(&mut self, name: ClassName, record: ClassRecord) {
        self.classes.insert(name, record);
    }

    pub fn get(&self, class: &str) -> Option<&ClassRecord> {
        self.classes.get(class)
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Class names in registration order.
    pub fn class_names(&self) -> impl Iterator<Item = &ClassName> {
        self.classes.keys()
    }

    /// Fold another registry in, keeping this one's order first.
    pub fn merge(&mut self, other: ClassRegistry) {
        for (name, record) in other.classes {
            self.insert(name, record);
        }
    }
}

impl ClassMetadataProvider for ClassRegistry {
    fn has_class(&self, class: &str) -> bool {
        self.contains(class)
    }

    fn doc_comment(&self, class: &str) -> Option<Arc<str>> {
        self.classes.get(class).and_then(|record| record.doc.clone())
    }
}
