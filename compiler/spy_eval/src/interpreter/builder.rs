//! `InterpreterBuilder` for configuring an `Interpreter`.

use super::Interpreter;
use crate::{stdout_handler, ErrorPolicy, SharedPrintHandler, VariableStore};

/// Builder for [`Interpreter`].
///
/// The variable store capacity is mandatory; the policy defaults to
/// `Lenient` and output defaults to stdout.
pub struct InterpreterBuilder {
    capacity: usize,
    policy: ErrorPolicy,
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            policy: ErrorPolicy::default(),
            print_handler: None,
        }
    }

    #[must_use]
    pub fn policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set where `print` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            store: VariableStore::new(self.capacity),
            policy: self.policy,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            diagnostics: Vec::new(),
        }
    }
}
