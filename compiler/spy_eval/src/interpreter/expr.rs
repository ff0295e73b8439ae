//! Expression evaluation: `<element> (<binop> <element>)?`.
//!
//! There is at most one operator per expression and no parentheses;
//! `(` is reserved for call syntax.

use spy_ir::TokenKind;

use super::Interpreter;
use crate::errors::{undefined_variable, unexpected_element, EvalResult};
use crate::{apply, Cursor, Value};

impl Interpreter {
    /// Evaluate the expression at the cursor and consume it.
    pub fn eval_expr(&mut self, cursor: &mut Cursor<'_>) -> EvalResult {
        let left = self.read_element(cursor)?;

        let op = cursor.current();
        if !op.kind.is_binary_operator() {
            return Ok(left);
        }
        let op_position = cursor.position();
        cursor.advance();

        let right = self.read_element(cursor)?;
        match apply(op.kind, &left, &right) {
            Ok(value) => Ok(value),
            Err(err) => self.recover(err.at(op_position, op), Value::int_zero()),
        }
    }

    /// Evaluate a single element (literal or variable) and consume it.
    ///
    /// A non-element token is consumed too, unless it is `)`, `,` or `Eos`:
    /// those belong to the enclosing statement and stay at the cursor.
    pub fn read_element(&mut self, cursor: &mut Cursor<'_>) -> EvalResult {
        let position = cursor.position();
        let token = cursor.current();
        if matches!(
            token.kind,
            TokenKind::RParen | TokenKind::Comma | TokenKind::Eos
        ) {
            return self.recover(
                unexpected_element(token).at(position, token),
                Value::int_zero(),
            );
        }
        cursor.advance();

        match token.kind {
            TokenKind::Int => Ok(Value::int(token.lexeme.as_str())),
            TokenKind::Str => Ok(Value::string(token.lexeme.as_str())),
            TokenKind::Ident => self
                .store
                .get(&token.lexeme)
                .cloned()
                .ok_or_else(|| undefined_variable(&token.lexeme).at(position, token)),
            _ => self.recover(
                unexpected_element(token).at(position, token),
                Value::int_zero(),
            ),
        }
    }
}
