//! Foundation types for propdoc.
//!
//! This module provides fundamental items used throughout the crate:
//! - [`ClassName`], [`PropertyName`] - small-string name aliases
//! - identifier character classes for PHP-flavored names
//!
//! This module has NO dependencies on other propdoc modules.

mod text;

pub use text::{is_ident_continue, is_ident_start, is_valid_ident};

use smol_str::SmolStr;

/// A fully qualified class name, e.g. `App\Entity\Book`.
///
/// Stored without a leading backslash.
pub type ClassName = SmolStr;

/// A magic property name as written after the `$` sigil, e.g. `tags`.
pub type PropertyName = SmolStr;
