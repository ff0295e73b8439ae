use pretty_assertions::assert_eq;
use spy_eval::EvalErrorKind;
use spyc::{internal_error_line, Problem, RunOptions};

use crate::common::{run, run_strict, run_with};

#[test]
fn test_lenient_run_reports_and_continues() {
    let (output, report) = run("5\nprint(1)");
    assert_eq!(output, "1\n");
    assert!(report.is_success());
    assert_eq!(report.diagnostics.len(), 1);
    assert!(internal_error_line(&report.diagnostics[0])
        .starts_with("**Internal Error: unknown start of stmt"));
}

#[test]
fn test_strict_run_stops_at_first_error() {
    let (output, report) = run_strict("5\nprint(1)");
    assert_eq!(output, "");
    assert!(report.diagnostics.is_empty());
    let err = report.result.unwrap_err();
    assert_eq!(err.code(), "E6003");
}

#[test]
fn test_undefined_variable_stops_the_program() {
    let (output, report) = run("print(1)\nprint(nope)\nprint(2)");
    assert_eq!(output, "1\n");
    let err = report.result.unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedVariable {
            name: "nope".to_string()
        }
    );
    assert_eq!(
        Problem::Eval(err).to_string(),
        "error[E6010]: undefined variable: nope (line 2, column 7)"
    );
}

#[test]
fn test_store_capacity_is_enforced() {
    let (output, report) = run_with("a = 1\nb = 2\nprint(a + b)\nc = 3", RunOptions::new(2));
    assert_eq!(output, "3\n");
    let err = report.result.unwrap_err();
    assert_eq!(err.code(), "E6013");
}

#[test]
fn test_overflow_is_fatal() {
    let (_, report) = run("x = 9223372036854775807\nprint(x + 1)");
    assert_eq!(report.result.unwrap_err().code(), "E6012");
}

#[test]
fn test_diagnostics_survive_a_fatal_error() {
    let (_, report) = run("print(=)\nprint(missing)");
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].code(), "E6002");
    assert_eq!(report.result.unwrap_err().code(), "E6010");
}

#[test]
fn test_missing_operand_does_not_eat_the_closing_paren() {
    let (output, report) = run("print(1 +)\nprint(2)");
    assert_eq!(output, "1\n2\n");
    assert!(report.is_success());
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].code(), "E6002");
}
