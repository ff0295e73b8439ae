//! Token cursor.
//!
//! The interpreter threads an explicit `&mut Cursor` through the
//! dispatcher, the expression evaluator and `print`. The cursor never moves
//! past the trailing `Eos`, so every read is in bounds.

use spy_ir::{Token, TokenKind, TokenList};

/// Position in a token stream.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Index of the next unconsumed token.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The next unconsumed token.
    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or_else(|| self.tokens.last())
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Kind of the token after the current one (`Eos` at the end).
    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eos, |t| t.kind)
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume the current token and return it. At `Eos` this is a no-op
    /// that keeps returning `Eos`.
    #[inline]
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eos)
    }
}
