//! Token list terminated by an end-of-stream sentinel.

use std::fmt;

use super::{Token, TokenKind};

/// An ordered, finite token sequence whose last token is always `Eos`.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Build a list from raw tokens, appending `Eos` if the input does not
    /// already end with one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eos) {
            tokens.push(Token::eos());
        }
        TokenList { tokens }
    }

    /// Number of tokens, including the trailing `Eos`.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// A list always holds at least the `Eos` sentinel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get token at index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// The final `Eos` token.
    #[inline]
    pub fn last(&self) -> &Token {
        // `new` guarantees a trailing Eos.
        &self.tokens[self.tokens.len() - 1]
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}

impl Default for TokenList {
    fn default() -> Self {
        TokenList::new(Vec::new())
    }
}

impl From<Vec<Token>> for TokenList {
    fn from(tokens: Vec<Token>) -> Self {
        TokenList::new(tokens)
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenList({} tokens)", self.tokens.len())
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
