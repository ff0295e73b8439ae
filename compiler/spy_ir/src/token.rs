//! Token types produced by the lexer and consumed by the interpreter.

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

use super::Span;

/// A token: its kind, the text it carries, and where it came from.
///
/// The lexeme is meaningful for identifiers (the name), integer literals
/// (the digits) and string literals (the contents between the quotes,
/// verbatim). For punctuation and operators it is the symbol itself.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character.
    pub column: u32,
}

impl Token {
    #[inline]
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        span: Span,
        line: u32,
        column: u32,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            span,
            line,
            column,
        }
    }

    /// Create a token without source position, for tests and embedders that
    /// build token streams by hand.
    pub fn dummy(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            span: Span::DUMMY,
            line: 0,
            column: 0,
        }
    }

    /// The end-of-stream sentinel.
    pub fn eos() -> Self {
        Token::dummy(TokenKind::Eos, "")
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.lexeme, self.span)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} \"{}\" ({}:{})",
            self.kind.display_name(),
            self.lexeme,
            self.line,
            self.column
        )
    }
}
