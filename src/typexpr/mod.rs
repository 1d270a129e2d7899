//! PHPDoc type expressions.
//!
//! The pipeline has three stages: [`lexer`] turns an expression string
//! into tokens, [`parser`] builds a [`TypeExpr`] tree, and
//! [`TypeResolver`] lowers the tree into the flat [`Type`] descriptors
//! queries hand out.
//!
//! ```
//! use propdoc::typexpr::{Builtin, Type, TypeResolver};
//!
//! let resolver = TypeResolver::new();
//! let types = resolver.resolve("?string").unwrap();
//! assert_eq!(types, vec![Type::builtin(Builtin::String).with_nullable(true)]);
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod resolve;
pub mod types;

pub use ast::TypeExpr;
pub use parser::{parse, TypeExprError};
pub use resolve::TypeResolver;
pub use types::{Builtin, Type};
