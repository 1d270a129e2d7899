//! Resolved property type descriptors.
//!
//! A [`Type`] is the flattened answer a caller gets back: one builtin
//! kind, an optional class name, nullability, and collection key/value
//! descriptors when the source expression carried them. Unions resolve
//! to several descriptors, so queries hand out `Vec<Type>`.

use std::fmt;

use crate::base::ClassName;

/// The builtin kind a descriptor bottoms out at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Builtin {
    Int,
    Float,
    String,
    Bool,
    Array,
    Iterable,
    Object,
    Callable,
    Resource,
    Null,
}

impl Builtin {
    /// Canonical keyword for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Builtin::Int => "int",
            Builtin::Float => "float",
            Builtin::String => "string",
            Builtin::Bool => "bool",
            Builtin::Array => "array",
            Builtin::Iterable => "iterable",
            Builtin::Object => "object",
            Builtin::Callable => "callable",
            Builtin::Resource => "resource",
            Builtin::Null => "null",
        }
    }

    /// Map a doc keyword to its builtin kind, folding the long-form
    /// aliases PHPDoc allows (`integer`, `boolean`, `double`, `void`,
    /// the `true`/`false` literals). Class names return `None`.
    pub fn from_keyword(keyword: &str) -> Option<Builtin> {
        let folded = keyword.to_ascii_lowercase();
        let builtin = match folded.as_str() {
            "int" | "integer" => Builtin::Int,
            "float" | "double" => Builtin::Float,
            "string" => Builtin::String,
            "bool" | "boolean" | "true" | "false" => Builtin::Bool,
            "array" | "list" => Builtin::Array,
            "iterable" => Builtin::Iterable,
            "object" => Builtin::Object,
            "callable" => Builtin::Callable,
            "resource" => Builtin::Resource,
            "null" | "void" => Builtin::Null,
            _ => return None,
        };
        Some(builtin)
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resolved type a property can hold.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Type {
    pub builtin: Builtin,
    pub nullable: bool,
    /// Fully qualified class name, only for [`Builtin::Object`] kinds
    /// resolved from a named class.
    pub class: Option<ClassName>,
    pub collection: bool,
    pub collection_key: Option<Box<Type>>,
    pub collection_value: Option<Box<Type>>,
}

impl Type {
    /// A plain builtin with no collection structure.
    pub fn builtin(builtin: Builtin) -> Type {
        Type {
            builtin,
            nullable: false,
            class: None,
            collection: false,
            collection_key: None,
            collection_value: None,
        }
    }

    /// An object of a known class.
    pub fn object(class: impl Into<ClassName>) -> Type {
        Type {
            class: Some(class.into()),
            ..Type::builtin(Builtin::Object)
        }
    }

    /// An object with no class attached, as `self` and friends resolve to.
    pub fn bare_object() -> Type {
        Type::builtin(Builtin::Object)
    }

    /// A collection over the given key and value descriptors.
    pub fn collection(builtin: Builtin, key: Option<Type>, value: Option<Type>) -> Type {
        Type {
            builtin,
            nullable: false,
            class: None,
            collection: true,
            collection_key: key.map(Box::new),
            collection_value: value.map(Box::new),
        }
    }

    /// A collection carried by a named class, for `Collection<T>` style
    /// generics over non-array classes.
    pub fn object_collection(
        class: impl Into<ClassName>,
        key: Option<Type>,
        value: Option<Type>,
    ) -> Type {
        Type {
            class: Some(class.into()),
            ..Type::collection(Builtin::Object, key, value)
        }
    }

    /// Same descriptor with nullability switched.
    pub fn with_nullable(mut self, nullable: bool) -> Type {
        self.nullable = nullable;
        self
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            f.write_str("?")?;
        }
        match &self.class {
            Some(class) => f.write_str(class)?,
            None => write!(f, "{}", self.builtin)?,
        }
        if self.collection {
            f.write_str("[]")?;
        }
        Ok(())
    }
}
