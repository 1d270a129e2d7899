//! Lowering from [`TypeExpr`] trees to flat [`Type`] descriptors.
//!
//! One expression can resolve to several descriptors (unions and
//! intersections) or to none at all (`mixed` carries no information a
//! descriptor could hold).

use smol_str::SmolStr;

use super::ast::TypeExpr;
use super::parser::{self, TypeExprError};
use super::types::{Builtin, Type};

/// Resolves doc type expressions into descriptor lists.
#[derive(Debug, Default, Clone, Copy)]
pub struct TypeResolver;

impl TypeResolver {
    pub fn new() -> TypeResolver {
        TypeResolver
    }

    /// Parse and lower a raw expression in one step.
    pub fn resolve(&self, input: &str) -> Result<Vec<Type>, TypeExprError> {
        let expr = parser::parse(input)?;
        Ok(self.lower(&expr))
    }

    /// Lower an already-parsed expression. Infallible: every tree the
    /// parser can produce has a lowering, even if it is empty.
    pub fn lower(&self, expr: &TypeExpr) -> Vec<Type> {
        self.lower_with(expr, false)
    }

    fn lower_with(&self, expr: &TypeExpr, nullable: bool) -> Vec<Type> {
        match expr {
            TypeExpr::Nullable(inner) => self.lower_with(inner, true),
            TypeExpr::Name(name) => self.lower_name(name, nullable),
            TypeExpr::List(inner) => {
                let value = self.first_lowering(inner);
                vec![
                    Type::collection(
                        Builtin::Array,
                        Some(Type::builtin(Builtin::Int)),
                        value,
                    )
                    .with_nullable(nullable),
                ]
            }
            TypeExpr::Generic { base, args } => self.lower_generic(base, args, nullable),
            TypeExpr::Union(members) => self.lower_union(members, nullable),
            TypeExpr::Intersection(members) => members
                .iter()
                .flat_map(|member| self.lower_with(member, nullable))
                .collect(),
        }
    }

    /// A `null` member marks every other member nullable instead of
    /// producing its own descriptor. The flag is shared across the whole
    /// union, so `?int|string` makes both halves nullable.
    fn lower_union(&self, members: &[TypeExpr], nullable: bool) -> Vec<Type> {
        let mut nullable = nullable;
        let mut rest: Vec<&TypeExpr> = Vec::new();

        for member in members {
            let mut member = member;
            if let TypeExpr::Nullable(inner) = member {
                nullable = true;
                member = inner;
            }
            if member.is_null_name() {
                nullable = true;
                continue;
            }
            rest.push(member);
        }

        if rest.is_empty() {
            return vec![Type::builtin(Builtin::Null).with_nullable(true)];
        }

        rest.into_iter()
            .flat_map(|member| self.lower_with(member, nullable))
            .collect()
    }

    fn lower_name(&self, name: &str, nullable: bool) -> Vec<Type> {
        let folded = name.to_ascii_lowercase();

        // Nothing a descriptor could say
        if folded == "mixed" {
            return Vec::new();
        }

        if matches!(folded.as_str(), "self" | "static" | "parent" | "$this") {
            return vec![Type::bare_object().with_nullable(nullable)];
        }

        match Builtin::from_keyword(name) {
            Some(Builtin::Array) if folded == "list" => vec![
                Type::collection(Builtin::Array, Some(Type::builtin(Builtin::Int)), None)
                    .with_nullable(nullable),
            ],
            Some(Builtin::Array) => {
                vec![Type::collection(Builtin::Array, None, None).with_nullable(nullable)]
            }
            // A bare `null` is nullable by definition, whatever the context said
            Some(Builtin::Null) => vec![Type::builtin(Builtin::Null).with_nullable(true)],
            Some(builtin) => vec![Type::builtin(builtin).with_nullable(nullable)],
            None => {
                let class = SmolStr::new(name.trim_start_matches('\\'));
                vec![Type::object(class).with_nullable(nullable)]
            }
        }
    }

    fn lower_generic(&self, base: &str, args: &[TypeExpr], nullable: bool) -> Vec<Type> {
        let (key, value) = match args {
            [] => (None, None),
            [value] => (None, self.first_lowering(value)),
            [key, value, ..] => (self.first_lowering(key), self.first_lowering(value)),
        };

        let folded = base.to_ascii_lowercase();
        let descriptor = match folded.as_str() {
            "array" => Type::collection(Builtin::Array, key, value),
            "list" => Type::collection(
                Builtin::Array,
                key.or_else(|| Some(Type::builtin(Builtin::Int))),
                value,
            ),
            "iterable" => Type::collection(Builtin::Iterable, key, value),
            _ => Type::object_collection(base.trim_start_matches('\\'), key, value),
        };
        vec![descriptor.with_nullable(nullable)]
    }

    /// Key/value slots hold a single descriptor, so a sub-expression that
    /// lowers to several contributes its first and one that lowers to none
    /// leaves the slot empty.
    fn first_lowering(&self, expr: &TypeExpr) -> Option<Type> {
        self.lower_with(expr, false).into_iter().next()
    }
}
