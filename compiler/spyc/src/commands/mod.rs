//! Command handlers for the `spy` CLI.
//!
//! Handlers print to stdout/stderr and exit the process on failure.

use spyc::Problem;

mod debug;
mod run;

pub use debug::lex_file;
pub use run::run_file;

/// Print a driver problem and exit with status 1.
pub fn fail(problem: &Problem) -> ! {
    eprintln!("{}", render(problem));
    std::process::exit(1);
}

fn render(problem: &Problem) -> String {
    match problem {
        Problem::Io { .. } | Problem::Usage(_) => format!("error: {problem}"),
        Problem::Lex(_) | Problem::Eval(_) => problem.to_string(),
    }
}
