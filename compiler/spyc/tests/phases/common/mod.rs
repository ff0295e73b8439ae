//! Shared helpers for phase tests.

use spy_eval::{buffer_handler, ErrorPolicy};
use spyc::{run_source, RunOptions, RunReport};

/// Capacity used when a test doesn't care about the store size.
pub const DEFAULT_CAPACITY: usize = 16;

/// Run `source` leniently and return its output along with the report.
pub fn run(source: &str) -> (String, RunReport) {
    run_with(source, RunOptions::new(DEFAULT_CAPACITY))
}

pub fn run_strict(source: &str) -> (String, RunReport) {
    run_with(
        source,
        RunOptions::new(DEFAULT_CAPACITY).with_policy(ErrorPolicy::Strict),
    )
}

pub fn run_with(source: &str, options: RunOptions) -> (String, RunReport) {
    let output = buffer_handler();
    let report = run_source(source, options, output.clone()).expect("program should lex");
    (output.get_output(), report)
}

/// Output of a program that must finish without any error.
pub fn output_of(source: &str) -> String {
    let (output, report) = run(source);
    assert!(report.diagnostics.is_empty(), "{:?}", report.diagnostics);
    assert!(report.is_success(), "{:?}", report.result);
    output
}
