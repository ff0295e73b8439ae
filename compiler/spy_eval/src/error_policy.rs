//! Error policy for the interpreter.
//!
//! The same evaluation code serves both policies: every step returns a
//! `Result`, and the policy decides at one place whether a recoverable
//! error is recorded and replaced by its fallback, or propagated.

use crate::EvalError;

/// How the interpreter reacts to recoverable errors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ErrorPolicy {
    /// Report recoverable errors and continue with a fallback value.
    #[default]
    Lenient,
    /// Abort on the first error of any kind.
    Strict,
}

impl ErrorPolicy {
    /// Whether execution should continue past `err`.
    #[inline]
    pub fn recovers(self, err: &EvalError) -> bool {
        matches!(self, ErrorPolicy::Lenient) && err.is_recoverable()
    }

    #[inline]
    pub fn is_strict(self) -> bool {
        matches!(self, ErrorPolicy::Strict)
    }
}
