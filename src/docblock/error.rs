//! Parse failures for whole doc comments.

use smol_str::SmolStr;
use thiserror::Error;

use crate::typexpr::TypeExprError;

/// Why a comment was rejected as a docblock.
///
/// Rejection is block-level: callers that cache parse results treat any
/// of these as "this class has no usable documentation".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocBlockError {
    /// Nothing but whitespace.
    #[error("doc comment is empty")]
    Empty,

    /// Not a doc comment: no `/**` opener.
    #[error("doc comment does not start with `/**`")]
    MissingOpener,

    /// Truncated: no closing `*/`.
    #[error("doc comment does not end with `*/`")]
    MissingTerminator,

    /// A property tag carried a type expression the type grammar
    /// rejects. The whole block is refused rather than silently
    /// dropping the tag.
    #[error("invalid type expression in @{tag}: {source}")]
    InvalidTypeExpression {
        /// Name of the offending tag, `@` excluded.
        tag: SmolStr,
        #[source]
        source: TypeExprError,
    },
}
