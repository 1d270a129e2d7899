//! Per-call extraction context.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// Opaque key/value options handed through every extractor call.
///
/// The built-in extractor ignores it; it exists so callers can pass
/// options through a chain to extractors that do care, without the
/// trait surface changing underneath them.
#[derive(Debug, Clone, Default)]
pub struct ExtractorContext {
    values: FxHashMap<SmolStr, SmolStr>,
}

impl ExtractorContext {
    pub fn new() -> ExtractorContext {
        ExtractorContext::default()
    }

    pub fn insert(&mut self, key: impl Into<SmolStr>, value: impl Into<SmolStr>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(SmolStr::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
