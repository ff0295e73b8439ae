//! Token kinds for SimplePy.

use std::fmt;

/// Closed set of token kinds.
///
/// Literal and identifier payloads live in [`super::Token::lexeme`], so the
/// kind itself is a plain `Copy` tag.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Identifier: `x`, `print`
    Ident,
    /// Integer literal: `42`
    Int,
    /// String literal: `"hi"` or `'hi'`
    Str,

    Plus,     // +
    Minus,    // -
    Star,     // *
    Slash,    // /
    Percent,  // %
    StarStar, // **

    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=
    EqEq,  // ==
    NotEq, // !=

    LParen, // (
    RParen, // )
    Comma,  // ,
    Assign, // =

    /// End of stream. Always the last token of a `TokenList`.
    Eos,
}

impl TokenKind {
    /// Arithmetic operators: `+ - * / % **`.
    #[inline]
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::StarStar
        )
    }

    /// Relational operators: `< <= > >= == !=`.
    #[inline]
    pub fn is_relational(self) -> bool {
        matches!(
            self,
            TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
                | TokenKind::EqEq
                | TokenKind::NotEq
        )
    }

    /// Any token that may sit between two elements of an expression.
    #[inline]
    pub fn is_binary_operator(self) -> bool {
        self.is_arithmetic() || self.is_relational()
    }

    /// Tokens that form an expression element on their own.
    #[inline]
    pub fn is_element(self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::Int | TokenKind::Str)
    }

    /// Human-readable name, used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer",
            TokenKind::Str => "string",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::StarStar => "**",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Assign => "=",
            TokenKind::Eos => "end of stream",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
