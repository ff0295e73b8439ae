//! Lexer errors.

use spy_ir::Span;

/// What went wrong while tokenizing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("source file is too large")]
    SourceTooLarge,
}

/// A lexer error with its location.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {line}, column {column}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span, line: u32, column: u32) -> Self {
        LexError {
            kind,
            span,
            line,
            column,
        }
    }
}
