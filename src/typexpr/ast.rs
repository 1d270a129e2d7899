//! Typed AST for PHPDoc type expressions.

use smol_str::SmolStr;

/// A parsed type expression, structurally faithful to what was written.
///
/// Class paths keep their written form; normalization such as stripping a
/// leading `\` happens during descriptor resolution, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeExpr {
    /// A bare name: a builtin (`string`), a class path (`\App\Entity\Book`),
    /// or the `$this` marker.
    Name(SmolStr),
    /// `?T`
    Nullable(Box<TypeExpr>),
    /// `T[]`
    List(Box<TypeExpr>),
    /// `base<arg, ...>` where `base` is `array`, `iterable`, `list`, or a
    /// class path.
    Generic { base: SmolStr, args: Vec<TypeExpr> },
    /// `A|B|...`
    Union(Vec<TypeExpr>),
    /// `A&B&...`
    Intersection(Vec<TypeExpr>),
}

impl TypeExpr {
    /// The `null` name, which folds into nullability during resolution.
    pub fn is_null_name(&self) -> bool {
        matches!(self, TypeExpr::Name(name) if name.eq_ignore_ascii_case("null"))
    }
}
