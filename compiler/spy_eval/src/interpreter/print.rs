//! The `print` statement.

use spy_ir::TokenKind;

use super::Interpreter;
use crate::errors::{unterminated_call, EvalResult};
use crate::Cursor;

impl Interpreter {
    /// `print "(" (<expr> ("," <expr>)*)? ")"`
    ///
    /// Writes the arguments left to right separated by single spaces, then
    /// one line terminator.
    pub fn exec_print(&mut self, cursor: &mut Cursor<'_>) -> EvalResult<()> {
        let name = cursor.advance();
        cursor.advance(); // (

        loop {
            match cursor.current_kind() {
                TokenKind::RParen => break,
                TokenKind::Eos => {
                    let position = cursor.position();
                    return Err(unterminated_call(&name.lexeme).at(position, cursor.current()));
                }
                _ => {}
            }

            let value = self.eval_expr(cursor)?;
            self.print_handler.print(value.text());

            if cursor.check(TokenKind::Comma) {
                self.print_handler.print(" ");
                cursor.advance();
            }
        }

        cursor.advance(); // )
        self.print_handler.println("");
        Ok(())
    }
}
