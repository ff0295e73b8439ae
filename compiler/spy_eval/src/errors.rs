//! Runtime errors.
//!
//! Every fallible step of evaluation returns an [`EvalError`]. Some kinds
//! are *recoverable*: under the lenient policy the interpreter records them
//! and continues with a fallback value. The rest always abort the run.
//!
//! Factory functions (e.g. [`undefined_variable`]) are the preferred way to
//! build errors; callers attach the token location with [`EvalError::at`].

use spy_ir::{Token, TokenKind};

/// Result of an evaluation step.
pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Recoverable
    #[error("unknown operator, encountered token={op}")]
    UnrecognizedOperator { op: TokenKind },
    #[error("was expecting an <element>, encountered token={token}")]
    UnexpectedElement { token: String },
    #[error("unknown start of stmt, token={token}")]
    UnrecognizedStatementStart { token: String },

    // Fatal
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },
    #[error("invalid integer: \"{text}\"")]
    InvalidInteger { text: String },
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
    #[error("variable store is full (capacity {capacity}), cannot add '{name}'")]
    CapacityExceeded { capacity: usize, name: String },
    #[error("missing ')' to close call to {name}()")]
    UnterminatedCall { name: String },
}

impl EvalErrorKind {
    /// Stable error code (runtime range `E6xxx`).
    pub fn code(&self) -> &'static str {
        match self {
            EvalErrorKind::UnrecognizedOperator { .. } => "E6001",
            EvalErrorKind::UnexpectedElement { .. } => "E6002",
            EvalErrorKind::UnrecognizedStatementStart { .. } => "E6003",
            EvalErrorKind::UndefinedVariable { .. } => "E6010",
            EvalErrorKind::InvalidInteger { .. } => "E6011",
            EvalErrorKind::IntegerOverflow { .. } => "E6012",
            EvalErrorKind::CapacityExceeded { .. } => "E6013",
            EvalErrorKind::UnterminatedCall { .. } => "E6014",
        }
    }

    /// Whether the lenient policy may continue past this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EvalErrorKind::UnrecognizedOperator { .. }
                | EvalErrorKind::UnexpectedElement { .. }
                | EvalErrorKind::UnrecognizedStatementStart { .. }
        )
    }
}

/// Evaluation error with the location of the offending token, when known.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Index of the offending token in the token stream.
    pub position: Option<usize>,
    /// 1-based source line, 0 when the token carries no position.
    pub line: u32,
    pub column: u32,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            position: None,
            line: 0,
            column: 0,
        }
    }

    /// Attach a token location. The first location attached wins.
    #[must_use]
    pub fn at(mut self, position: usize, token: &Token) -> Self {
        if self.position.is_none() {
            self.position = Some(position);
            self.line = token.line;
            self.column = token.column;
        }
        self
    }

    #[inline]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    #[inline]
    pub fn is_recoverable(&self) -> bool {
        self.kind.is_recoverable()
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

pub fn unrecognized_operator(op: TokenKind) -> EvalError {
    EvalErrorKind::UnrecognizedOperator { op }.into()
}

pub fn unexpected_element(token: &Token) -> EvalError {
    EvalErrorKind::UnexpectedElement {
        token: token.to_string(),
    }
    .into()
}

pub fn unrecognized_statement_start(token: &Token) -> EvalError {
    EvalErrorKind::UnrecognizedStatementStart {
        token: token.to_string(),
    }
    .into()
}

pub fn undefined_variable(name: &str) -> EvalError {
    EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    }
    .into()
}

pub fn invalid_integer(text: &str) -> EvalError {
    EvalErrorKind::InvalidInteger {
        text: text.to_string(),
    }
    .into()
}

pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalErrorKind::IntegerOverflow { operation }.into()
}

pub fn capacity_exceeded(capacity: usize, name: &str) -> EvalError {
    EvalErrorKind::CapacityExceeded {
        capacity,
        name: name.to_string(),
    }
    .into()
}

pub fn unterminated_call(name: &str) -> EvalError {
    EvalErrorKind::UnterminatedCall {
        name: name.to_string(),
    }
    .into()
}
