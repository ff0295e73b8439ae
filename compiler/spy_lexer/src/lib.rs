//! SimplePy lexer.
//!
//! Turns source text into a [`TokenList`] terminated by `Eos`. Whitespace,
//! newlines and `#` comments are insignificant: the statement grammar is
//! unambiguous without them.

mod lex_error;

use logos::Logos;
use spy_ir::{Span, Token, TokenKind, TokenList};

pub use lex_error::{LexError, LexErrorKind};

/// Raw logos token. Payloads are recovered from the slice afterwards.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"([ \t\r\n\f]+|#[^\n]*)")]
enum RawToken {
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[regex(r"[0-9]+")]
    Int,
    #[regex(r#""[^"\n]*""#)]
    #[regex(r"'[^'\n]*'")]
    Str,
    // A quote with no closing partner on the same line.
    #[regex(r#""[^"\n]*"#)]
    #[regex(r"'[^'\n]*")]
    UnterminatedStr,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("**")]
    StarStar,

    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token("=")]
    Assign,
}

impl RawToken {
    fn kind(self) -> Option<TokenKind> {
        let kind = match self {
            RawToken::Ident => TokenKind::Ident,
            RawToken::Int => TokenKind::Int,
            RawToken::Str => TokenKind::Str,
            RawToken::UnterminatedStr => return None,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Percent => TokenKind::Percent,
            RawToken::StarStar => TokenKind::StarStar,
            RawToken::Lt => TokenKind::Lt,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::Gt => TokenKind::Gt,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Assign => TokenKind::Assign,
        };
        Some(kind)
    }
}

/// Tracks line and column while tokens are visited in source order.
struct LineTracker<'a> {
    source: &'a str,
    offset: usize,
    line: u32,
    column: u32,
}

impl<'a> LineTracker<'a> {
    fn new(source: &'a str) -> Self {
        LineTracker {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Advance to `offset` (must not move backwards) and report its position.
    fn position_of(&mut self, offset: usize) -> (u32, u32) {
        for ch in self.source[self.offset..offset].chars() {
            if ch == '\n' {
                self.line = self.line.saturating_add(1);
                self.column = 1;
            } else {
                self.column = self.column.saturating_add(1);
            }
        }
        self.offset = offset;
        (self.line, self.column)
    }
}

/// Lex SimplePy source into a token list ending with `Eos`.
///
/// Stops at the first malformed token.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let mut tokens = Vec::new();
    let mut lines = LineTracker::new(source);
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let (line, column) = lines.position_of(range.start);
        let span = Span::try_from_range(range.clone())
            .map_err(|_| LexError::new(LexErrorKind::SourceTooLarge, Span::DUMMY, line, column))?;
        let slice = lexer.slice();

        let raw = match result {
            Ok(raw) => raw,
            Err(()) => {
                let ch = slice.chars().next().unwrap_or('\u{fffd}');
                return Err(LexError::new(
                    LexErrorKind::UnexpectedChar(ch),
                    span,
                    line,
                    column,
                ));
            }
        };

        let Some(kind) = raw.kind() else {
            return Err(LexError::new(
                LexErrorKind::UnterminatedString,
                span,
                line,
                column,
            ));
        };

        let lexeme = if kind == TokenKind::Str {
            // Quotes are single-byte, so the contents sit between them.
            &slice[1..slice.len() - 1]
        } else {
            slice
        };

        tokens.push(Token::new(kind, lexeme, span, line, column));
    }

    let (line, column) = lines.position_of(source.len());
    let end = Span::try_from_range(source.len()..source.len()).unwrap_or(Span::DUMMY);
    tokens.push(Token::new(TokenKind::Eos, "", end, line, column));

    tracing::debug!(count = tokens.len(), "lexed");
    Ok(TokenList::new(tokens))
}

#[cfg(test)]
mod tests;
