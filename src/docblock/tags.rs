//! The parsed docblock model.
//!
//! A [`DocBlock`] is summary text plus a flat tag list in source order.
//! Property declarations get the structured [`PropertyTag`] form; every
//! other tag survives as a [`GenericTag`] with its body preserved.

use std::sync::Arc;

use smol_str::SmolStr;
use text_size::TextRange;

use crate::base::PropertyName;
use crate::typexpr::TypeExpr;

/// Which of the three property tags declared a magic property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PropertyKind {
    /// `@property`
    ReadWrite,
    /// `@property-read`
    ReadOnly,
    /// `@property-write`
    WriteOnly,
}

impl PropertyKind {
    /// All kinds, in the order queries group them.
    pub const ALL: [PropertyKind; 3] = [
        PropertyKind::ReadWrite,
        PropertyKind::ReadOnly,
        PropertyKind::WriteOnly,
    ];

    pub fn tag_name(self) -> &'static str {
        match self {
            PropertyKind::ReadWrite => "property",
            PropertyKind::ReadOnly => "property-read",
            PropertyKind::WriteOnly => "property-write",
        }
    }

    /// Tag names are matched exactly; `@Property` is somebody else's tag.
    pub fn from_tag_name(name: &str) -> Option<PropertyKind> {
        match name {
            "property" => Some(PropertyKind::ReadWrite),
            "property-read" => Some(PropertyKind::ReadOnly),
            "property-write" => Some(PropertyKind::WriteOnly),
            _ => None,
        }
    }

    pub fn readable(self) -> bool {
        !matches!(self, PropertyKind::WriteOnly)
    }

    pub fn writable(self) -> bool {
        !matches!(self, PropertyKind::ReadOnly)
    }
}

/// A structured `@property`/`@property-read`/`@property-write` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyTag {
    pub kind: PropertyKind,
    /// Property name without the `$` sigil.
    pub name: PropertyName,
    /// Parsed type expression, when the tag carried one.
    pub type_expr: Option<TypeExpr>,
    /// The type expression exactly as written.
    pub type_text: Option<String>,
    pub description: Option<String>,
    /// Range of the tag in the raw comment, from `@` through the last
    /// line of its body.
    pub span: TextRange,
}

impl PropertyTag {
    pub fn is_readable(&self) -> bool {
        self.kind.readable()
    }

    pub fn is_writable(&self) -> bool {
        self.kind.writable()
    }
}

/// Any tag that is not a property declaration, body kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenericTag {
    /// Tag name without the `@`.
    pub name: SmolStr,
    pub body: String,
    pub span: TextRange,
}

/// One tag in a docblock, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    Property(PropertyTag),
    Other(GenericTag),
}

impl Tag {
    /// Tag name without the `@`.
    pub fn name(&self) -> &str {
        match self {
            Tag::Property(tag) => tag.kind.tag_name(),
            Tag::Other(tag) => &tag.name,
        }
    }

    pub fn span(&self) -> TextRange {
        match self {
            Tag::Property(tag) => tag.span,
            Tag::Other(tag) => tag.span,
        }
    }

    pub fn as_property(&self) -> Option<&PropertyTag> {
        match self {
            Tag::Property(tag) => Some(tag),
            Tag::Other(_) => None,
        }
    }
}

/// A parsed class doc comment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocBlock {
    summary: Option<String>,
    description: Option<String>,
    tags: Vec<Tag>,
    /// The comment as handed to the parser. Kept so position queries
    /// against the original text need no second trip to the provider.
    source: Arc<str>,
}

impl DocBlock {
    pub(crate) fn new(
        summary: Option<String>,
        description: Option<String>,
        tags: Vec<Tag>,
        source: Arc<str>,
    ) -> DocBlock {
        DocBlock {
            summary,
            description,
            tags,
            source,
        }
    }

    /// First paragraph of the text before any tag.
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Remaining paragraphs of the pre-tag text.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// All tags in source order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Property tags of every kind, in source order.
    pub fn property_tags(&self) -> impl Iterator<Item = &PropertyTag> {
        self.tags.iter().filter_map(Tag::as_property)
    }

    /// Property tags of one kind, in source order.
    pub fn property_tags_of(&self, kind: PropertyKind) -> impl Iterator<Item = &PropertyTag> {
        self.property_tags().filter(move |tag| tag.kind == kind)
    }

    /// Tags matching a name, `@` excluded: `tags_named("author")`.
    pub fn tags_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Tag> + 'a {
        self.tags.iter().filter(move |tag| tag.name() == name)
    }

    /// The raw comment this block was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }
}
