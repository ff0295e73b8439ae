//! Statement dispatcher.
//!
//! A program is a flat sequence of statements, each starting with an
//! identifier:
//!
//! ```text
//! <stmt>    ::= <funcall> | <assign>
//! <funcall> ::= "print" "(" (<expr> ("," <expr>)*)? ")"
//! <assign>  ::= <identifier> "=" <expr>
//! <expr>    ::= <element> (<binop> <element>)?
//! <element> ::= <identifier> | <integer> | <string>
//! ```
//!
//! The dispatcher reads the leading token, routes to `print` or to
//! assignment, and repeats until `Eos`.

mod builder;
mod expr;
mod print;

use spy_ir::{TokenKind, TokenList};
use tracing::{trace, warn};

use crate::errors::{unrecognized_statement_start, EvalError, EvalResult};
use crate::{Cursor, ErrorPolicy, SharedPrintHandler, VariableStore};

pub use builder::InterpreterBuilder;

/// The reserved name of the built-in output statement.
pub const PRINT_NAME: &str = "print";

/// Counts from a completed run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Statements dispatched, including ones skipped by recovery.
    pub statements: usize,
    /// Recoverable errors recorded during the run.
    pub diagnostics: usize,
}

/// SimplePy interpreter: owns the variable store and the output sink.
pub struct Interpreter {
    store: VariableStore,
    policy: ErrorPolicy,
    print_handler: SharedPrintHandler,
    diagnostics: Vec<EvalError>,
}

impl Interpreter {
    /// Execute every statement of `tokens`.
    ///
    /// Stops at `Eos`, or at the first error the policy does not recover.
    pub fn run(&mut self, tokens: &TokenList) -> EvalResult<RunSummary> {
        let mut cursor = Cursor::new(tokens);
        let recorded_before = self.diagnostics.len();
        let mut statements = 0;

        while !cursor.is_at_end() {
            self.exec_stmt(&mut cursor)?;
            statements += 1;
        }

        Ok(RunSummary {
            statements,
            diagnostics: self.diagnostics.len() - recorded_before,
        })
    }

    /// Execute the statement at the cursor.
    #[tracing::instrument(level = "trace", skip_all, fields(pos = cursor.position()))]
    pub fn exec_stmt(&mut self, cursor: &mut Cursor<'_>) -> EvalResult<()> {
        let position = cursor.position();
        let token = cursor.current();

        if token.kind != TokenKind::Ident {
            // Skip one token and hope the next one starts a statement.
            cursor.advance();
            let err = unrecognized_statement_start(token).at(position, token);
            return self.recover(err, ());
        }

        if token.lexeme == PRINT_NAME {
            self.exec_print(cursor)
        } else {
            self.exec_assign(cursor)
        }
    }

    /// `<identifier> "=" <expr>`
    fn exec_assign(&mut self, cursor: &mut Cursor<'_>) -> EvalResult<()> {
        let position = cursor.position();
        let target = cursor.advance();
        cursor.advance(); // =

        let value = self.eval_expr(cursor)?;
        trace!(name = %target.lexeme, %value, "assign");
        self.store
            .assign_or_insert(&target.lexeme, value)
            .map_err(|e| e.at(position, target))?;
        Ok(())
    }

    /// Apply the error policy: record a recoverable error and yield
    /// `fallback`, or propagate.
    fn recover<T>(&mut self, err: EvalError, fallback: T) -> EvalResult<T> {
        if self.policy.recovers(&err) {
            warn!(code = err.code(), line = err.line, column = err.column, "{err}");
            self.diagnostics.push(err);
            Ok(fallback)
        } else {
            Err(err)
        }
    }

    pub fn store(&self) -> &VariableStore {
        &self.store
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Recoverable errors recorded so far, oldest first.
    pub fn diagnostics(&self) -> &[EvalError] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<EvalError> {
        std::mem::take(&mut self.diagnostics)
    }
}
