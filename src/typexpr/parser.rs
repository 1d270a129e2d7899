//! Recursive descent parser for PHPDoc type expressions.
//!
//! Builds a [`TypeExpr`] tree from tokens. Precedence, loosest first:
//! union (`|`), intersection (`&`), then atoms with `?` prefix and `[]`
//! suffixes. `>>` needs no special casing because the lexer never glues
//! angle brackets together.

use smol_str::SmolStr;
use thiserror::Error;

use super::ast::TypeExpr;
use super::lexer::{Lexer, Token, TokenKind};

/// A malformed type expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeExprError {
    /// Nothing but whitespace.
    #[error("empty type expression")]
    Empty,

    /// A token the grammar cannot place.
    #[error("unexpected `{text}` at offset {offset} in type expression")]
    UnexpectedToken { text: String, offset: u32 },

    /// Input stopped where the grammar needed more.
    #[error("unexpected end of type expression")]
    UnexpectedEnd,
}

/// Parse a whole type expression, requiring all input to be consumed.
pub fn parse(input: &str) -> Result<TypeExpr, TypeExprError> {
    let tokens: Vec<_> = Lexer::new(input)
        .filter(|t| !t.kind.is_trivia())
        .collect();

    if tokens.is_empty() {
        return Err(TypeExprError::Empty);
    }

    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
    };
    let expr = parser.parse_union()?;

    match parser.current() {
        Some(token) => Err(unexpected(token)),
        None => Ok(expr),
    }
}

fn unexpected(token: &Token<'_>) -> TypeExprError {
    TypeExprError::UnexpectedToken {
        text: token.text.to_string(),
        offset: token.offset.into(),
    }
}

/// The parser state
struct Parser<'a, 't> {
    tokens: &'a [Token<'t>],
    pos: usize,
}

impl<'a, 't> Parser<'a, 't> {
    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'t>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    fn nth_kind(&self, n: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + n).map(|t| t.kind)
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&Token<'t>, TypeExprError> {
        match self.tokens.get(self.pos) {
            Some(token) if token.kind == kind => {
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(unexpected(token)),
            None => Err(TypeExprError::UnexpectedEnd),
        }
    }

    // =========================================================================
    // Grammar
    // =========================================================================

    fn parse_union(&mut self) -> Result<TypeExpr, TypeExprError> {
        let first = self.parse_intersection()?;
        if !self.at(TokenKind::Pipe) {
            return Ok(first);
        }

        let mut members = vec![first];
        while self.eat(TokenKind::Pipe) {
            members.push(self.parse_intersection()?);
        }
        Ok(TypeExpr::Union(members))
    }

    fn parse_intersection(&mut self) -> Result<TypeExpr, TypeExprError> {
        let first = self.parse_atomic()?;
        if !self.at(TokenKind::Amp) {
            return Ok(first);
        }

        let mut members = vec![first];
        while self.eat(TokenKind::Amp) {
            members.push(self.parse_atomic()?);
        }
        Ok(TypeExpr::Intersection(members))
    }

    fn parse_atomic(&mut self) -> Result<TypeExpr, TypeExprError> {
        if self.eat(TokenKind::Question) {
            let inner = self.parse_atomic()?;
            return Ok(TypeExpr::Nullable(Box::new(inner)));
        }

        let mut expr = self.parse_primary()?;
        while self.eat(TokenKind::LBracket) {
            self.expect(TokenKind::RBracket)?;
            expr = TypeExpr::List(Box::new(expr));
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<TypeExpr, TypeExprError> {
        let token = match self.current() {
            Some(token) => token.clone(),
            None => return Err(TypeExprError::UnexpectedEnd),
        };

        match token.kind {
            TokenKind::Ident | TokenKind::Backslash => self.parse_name_or_generic(),
            // `$this` is the only variable the grammar admits, as a self type
            TokenKind::Variable if token.text == "$this" => {
                self.bump();
                Ok(TypeExpr::Name(SmolStr::new(token.text)))
            }
            TokenKind::LParen => {
                self.bump();
                let inner = self.parse_union()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            _ => Err(unexpected(&token)),
        }
    }

    fn parse_name_or_generic(&mut self) -> Result<TypeExpr, TypeExprError> {
        let path = self.parse_path()?;

        if self.eat(TokenKind::Lt) {
            let mut args = vec![self.parse_union()?];
            while self.eat(TokenKind::Comma) {
                args.push(self.parse_union()?);
            }
            self.expect(TokenKind::Gt)?;
            return Ok(TypeExpr::Generic { base: path, args });
        }

        Ok(TypeExpr::Name(path))
    }

    /// A possibly-qualified name: `int`, `Book`, `\App\Entity\Book`.
    fn parse_path(&mut self) -> Result<SmolStr, TypeExprError> {
        let mut path = String::new();

        if self.at(TokenKind::Backslash) {
            path.push('\\');
            self.bump();
        }

        loop {
            let segment = self.expect(TokenKind::Ident)?;
            path.push_str(segment.text);

            // A separator only continues the path when another segment follows
            if self.at(TokenKind::Backslash) && self.nth_kind(1) == Some(TokenKind::Ident) {
                path.push('\\');
                self.bump();
            } else {
                break;
            }
        }

        Ok(SmolStr::from(path))
    }
}
