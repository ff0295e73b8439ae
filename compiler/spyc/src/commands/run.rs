//! The `run` command: lex and execute a SimplePy program.

use spy_eval::stdout_handler;
use spyc::{internal_error_line, run_path, Problem, RunOptions};

use super::fail;

/// Run a program file, writing its output to stdout.
///
/// Recovered errors are reported on stderr after the run. A fatal error is
/// reported last and exits with status 1.
pub fn run_file(path: &str, options: RunOptions) {
    let report = match run_path(path, options, stdout_handler()) {
        Ok(report) => report,
        Err(problem) => fail(&problem),
    };

    for diagnostic in &report.diagnostics {
        eprintln!("{}", internal_error_line(diagnostic));
    }

    if let Err(err) = report.result {
        fail(&Problem::Eval(err));
    }
}
