//! SimplePy driver.
//!
//! Glue between the collaborators and the execution engine:
//!
//! ```text
//! source text ──lex──► TokenList ──Interpreter::run──► output + diagnostics
//! ```
//!
//! The `spy` binary is a thin argument parser over these functions.

mod problem;

use std::sync::Once;

use spy_eval::{ErrorPolicy, EvalError, InterpreterBuilder, RunSummary, SharedPrintHandler};
use spy_lexer::LexError;

pub use problem::{internal_error_line, Problem};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Only active when `RUST_LOG` is set, e.g. `RUST_LOG=spy_eval=debug`.
/// Logs go to stderr so they never mix with program output. Safe to call
/// more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Settings for one program run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Maximum number of distinct variables.
    pub capacity: usize,
    pub policy: ErrorPolicy,
}

impl RunOptions {
    pub fn new(capacity: usize) -> Self {
        RunOptions {
            capacity,
            policy: ErrorPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// What happened during a run that got past lexing.
#[derive(Debug)]
pub struct RunReport {
    /// Recoverable errors, in the order they occurred.
    pub diagnostics: Vec<EvalError>,
    /// Summary of a completed run, or the error that stopped it.
    pub result: Result<RunSummary, EvalError>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Read a program file into memory.
pub fn read_program(path: &str) -> Result<String, Problem> {
    std::fs::read_to_string(path).map_err(|source| Problem::Io {
        path: path.to_string(),
        source,
    })
}

/// Parse the `memorysize` argument: a positive variable capacity.
pub fn parse_memory_size(arg: &str) -> Result<usize, Problem> {
    match arg.trim().parse::<usize>() {
        Ok(0) => Err(Problem::Usage(
            "memory size must be at least 1".to_string(),
        )),
        Ok(n) => Ok(n),
        Err(_) => Err(Problem::Usage(format!(
            "invalid memory size '{arg}', expected a positive integer"
        ))),
    }
}

/// Read, lex, and execute the program at `path`.
pub fn run_path(
    path: &str,
    options: RunOptions,
    output: SharedPrintHandler,
) -> Result<RunReport, Problem> {
    let source = read_program(path)?;
    Ok(run_source(&source, options, output)?)
}

/// Lex and execute `source`, writing program output to `output`.
pub fn run_source(
    source: &str,
    options: RunOptions,
    output: SharedPrintHandler,
) -> Result<RunReport, LexError> {
    let tokens = spy_lexer::lex(source)?;
    let mut interpreter = InterpreterBuilder::new(options.capacity)
        .policy(options.policy)
        .print_handler(output)
        .build();

    let result = interpreter.run(&tokens);
    tracing::debug!(
        ok = result.is_ok(),
        variables = interpreter.store().len(),
        "run finished"
    );

    Ok(RunReport {
        diagnostics: interpreter.take_diagnostics(),
        result,
    })
}
