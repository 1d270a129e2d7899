//! PHP doc comment parsing and the parsed docblock model.
//!
//! [`DocBlockParser`] turns a raw `/** ... */` comment into a
//! [`DocBlock`]: summary and description text plus the tag list in
//! source order. Property declarations (`@property`, `@property-read`,
//! `@property-write`) come back structured as [`PropertyTag`]s with
//! their type expressions already parsed; everything else is kept as a
//! [`GenericTag`].

pub mod error;
pub mod parser;
pub mod tags;

pub use error::DocBlockError;
pub use parser::DocBlockParser;
pub use tags::{DocBlock, GenericTag, PropertyKind, PropertyTag, Tag};
