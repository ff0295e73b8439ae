//! SimplePy Eval - execution engine for SimplePy programs.
//!
//! Executes a pre-tokenized program statement by statement against a flat,
//! growable variable store.
//!
//! # Architecture
//!
//! - `VariableStore`: insertion-ordered table of `name -> Value`
//! - `Value`: tagged union over {int, str}, always carrying its text form
//! - `apply`: operator semantics, dispatched on the operand types at runtime
//! - `Cursor`: explicit token position threaded through evaluation
//! - `Interpreter`: statement dispatcher, expression evaluator, `print`
//! - `ErrorPolicy`: lenient (report and continue) or strict (abort)
//!
//! Recoverable errors never unwind: the interpreter records them and
//! substitutes a fallback, unless the policy is strict.

mod cursor;
mod error_policy;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod store;
mod value;

pub use cursor::Cursor;
pub use error_policy::ErrorPolicy;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder, RunSummary, PRINT_NAME};
pub use operators::{apply, parse_int};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use store::{Assigned, Variable, VariableStore};
pub use value::{Value, ValueType};
