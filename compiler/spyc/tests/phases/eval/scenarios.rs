use pretty_assertions::assert_eq;

use crate::common::{output_of, run};

#[test]
fn test_sum_of_two_variables() {
    assert_eq!(output_of("x = 5\ny = 3\nprint(x + y)"), "8\n");
}

#[test]
fn test_division_by_zero_yields_zero() {
    assert_eq!(output_of("x = 10\ny = 0\nprint(x / y)"), "0\n");
}

#[test]
fn test_modulo_by_zero_yields_zero() {
    assert_eq!(output_of("x = 10\ny = 0\nprint(x % y)"), "0\n");
}

#[test]
fn test_string_concatenation() {
    assert_eq!(output_of("s = \"ab\"\nt = \"cd\"\nprint(s + t)"), "abcd\n");
}

#[test]
fn test_relational_results_are_one_and_zero() {
    assert_eq!(output_of("x = 2\ny = 10\nprint(x < y, y < x)"), "1 0\n");
}

#[test]
fn test_reassignment_changes_type() {
    assert_eq!(output_of("x = 2\nx = \"hi\"\nprint(x)"), "hi\n");
}

#[test]
fn test_statements_may_share_a_line() {
    assert_eq!(output_of("x = 5 y = 3 print(x * y)"), "15\n");
}

#[test]
fn test_text_comparison_is_lexicographic() {
    assert_eq!(
        output_of("a = \"10\"\nb = \"9\"\nprint(a < b, 10 < 9)"),
        "1 0\n"
    );
}

#[test]
fn test_mixed_addition_concatenates() {
    assert_eq!(output_of("print(1 + \"x\", \"x\" + 1)"), "1x x1\n");
}

#[test]
fn test_power_and_truncating_division() {
    assert_eq!(
        output_of("n = 0 - 7\nm = 0 - 1\nprint(2 ** 10, 7 / 2, n / 2, 2 ** m)"),
        "1024 3 -3 0\n"
    );
}

#[test]
fn test_expressions_do_not_chain() {
    // One binary operator per expression; the trailing `+ 3` starts a new
    // statement and is reported.
    let (output, report) = run("x = 1 + 2 + 3\nprint(x)");
    assert_eq!(output, "3\n");
    assert!(report.is_success());
    assert!(!report.diagnostics.is_empty());
}

#[test]
fn test_empty_program_prints_nothing() {
    let (output, report) = run("# nothing here\n");
    assert_eq!(output, "");
    assert_eq!(report.result.unwrap().statements, 0);
}

#[test]
fn test_bare_print_is_an_empty_line() {
    assert_eq!(output_of("print()\nprint('a')"), "\na\n");
}
