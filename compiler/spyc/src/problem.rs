//! Driver-level failures and how they are reported.

use spy_eval::EvalError;
use spy_lexer::LexError;

/// Anything that stops the driver.
#[derive(Debug, thiserror::Error)]
pub enum Problem {
    #[error("unable to open program file '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Usage(String),
    #[error("syntax error: {0}")]
    Lex(#[from] LexError),
    #[error("error[{}]: {}{}", .0.code(), .0, location(.0))]
    Eval(#[from] EvalError),
}

fn location(err: &EvalError) -> String {
    if err.line == 0 {
        String::new()
    } else {
        format!(" (line {}, column {})", err.line, err.column)
    }
}

/// Render a recovered error the way the diagnostic channel shows it.
pub fn internal_error_line(err: &EvalError) -> String {
    format!("**Internal Error: {err}")
}
