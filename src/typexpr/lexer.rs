//! Logos-based lexer for PHPDoc type expressions.
//!
//! Fast tokenization using the logos crate.

use logos::Logos;
use text_size::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::from(self.offset);
        self.offset += text.len() as u32;

        let kind = match result {
            Ok(kind) => kind,
            Err(()) => TokenKind::Error,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire expression into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Token kinds for the PHPDoc type grammar
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// One identifier segment of a name or class path
    #[regex(r"[a-zA-Z_\x{0080}-\x{10FFFF}][a-zA-Z0-9_\x{0080}-\x{10FFFF}]*")]
    Ident,

    /// A `$`-prefixed variable, only `$this` is valid in type position
    #[regex(r"\$[a-zA-Z_\x{0080}-\x{10FFFF}][a-zA-Z0-9_\x{0080}-\x{10FFFF}]*")]
    Variable,

    #[token("\\")]
    Backslash,

    #[token("?")]
    Question,

    #[token("|")]
    Pipe,

    #[token("&")]
    Amp,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    /// Anything the grammar does not know
    #[regex(r".", priority = 0)]
    Error,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        self == TokenKind::Whitespace
    }
}
