//! Driver tests: reading files, parsing arguments, rendering problems.

use std::io::Write;

use pretty_assertions::assert_eq;
use spy_eval::{buffer_handler, ErrorPolicy};
use spyc::{parse_memory_size, read_program, run_path, run_source, Problem, RunOptions};

#[test]
fn test_memory_size_accepts_positive_integers() {
    assert_eq!(parse_memory_size("1").unwrap(), 1);
    assert_eq!(parse_memory_size(" 64 ").unwrap(), 64);
}

#[test]
fn test_memory_size_rejects_zero_and_garbage() {
    for arg in ["0", "-3", "ten", ""] {
        let problem = parse_memory_size(arg).unwrap_err();
        assert!(matches!(problem, Problem::Usage(_)), "{arg}: {problem:?}");
    }
}

#[test]
fn test_missing_file_is_reported_by_path() {
    let problem = read_program("/definitely/not/here.py").unwrap_err();
    assert_eq!(
        problem.to_string(),
        "unable to open program file '/definitely/not/here.py'"
    );
}

#[test]
fn test_run_path_reads_and_runs_a_file() {
    let mut file = tempfile::Builder::new().suffix(".py").tempfile().unwrap();
    writeln!(file, "x = 2\ny = 10\nprint(x < y, y < x)").unwrap();

    let output = buffer_handler();
    let report = run_path(
        file.path().to_str().unwrap(),
        RunOptions::new(4),
        output.clone(),
    )
    .unwrap();
    assert!(report.is_success());
    assert_eq!(output.get_output(), "1 0\n");
}

#[test]
fn test_lex_error_aborts_before_running() {
    let output = buffer_handler();
    let err = run_source("print(1)\nx = @", RunOptions::new(4), output.clone()).unwrap_err();
    assert_eq!((err.line, err.column), (2, 5));
    assert_eq!(output.get_output(), "");
    assert_eq!(
        Problem::Lex(err).to_string(),
        "syntax error: unexpected character '@' at line 2, column 5"
    );
}

#[test]
fn test_run_options_default_to_lenient() {
    let options = RunOptions::new(8);
    assert_eq!(options.policy, ErrorPolicy::Lenient);
    assert_eq!(
        options.with_policy(ErrorPolicy::Strict).policy,
        ErrorPolicy::Strict
    );
}
