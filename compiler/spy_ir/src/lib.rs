//! SimplePy IR - token stream types.
//!
//! This crate holds the data that flows between the lexer and the
//! interpreter:
//! - Spans for source locations
//! - `TokenKind`, `Token` and `TokenList` for lexer output
//!
//! A `TokenList` always ends with a [`TokenKind::Eos`] token, so consumers
//! can walk it with a cursor without bounds checks beyond that sentinel.

mod span;
mod token;

pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
