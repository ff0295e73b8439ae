//! Binary operator semantics.
//!
//! Dispatch is on the operator first, then on the runtime types of the
//! operands:
//! - `+` adds two ints, and concatenates the raw text otherwise
//! - `- * / % **` always parse both operands as integers
//! - relational operators compare two ints numerically, anything else as
//!   text (byte-lexicographic), and yield int `1` or `0`
//!
//! Division and modulo by zero are not errors: they evaluate to `0`.

use std::cmp::Ordering;

use spy_ir::TokenKind;

use crate::errors::{integer_overflow, invalid_integer, unrecognized_operator, EvalResult};
use crate::Value;

/// Apply binary operator `op` to two values.
///
/// A token that is not a binary operator yields the recoverable
/// `UnrecognizedOperator` error.
pub fn apply(op: TokenKind, left: &Value, right: &Value) -> EvalResult {
    match op {
        TokenKind::Plus => add(left, right),
        TokenKind::Minus => int_arith(left, right, i64::checked_sub, "subtraction"),
        TokenKind::Star => int_arith(left, right, i64::checked_mul, "multiplication"),
        TokenKind::Slash => zero_guarded(left, right, i64::checked_div, "division"),
        TokenKind::Percent => zero_guarded(left, right, i64::checked_rem, "remainder"),
        TokenKind::StarStar => power(left, right),
        _ if op.is_relational() => compare(op, left, right),
        _ => Err(unrecognized_operator(op)),
    }
}

/// Parse the leading decimal integer of `text`.
///
/// Accepts optional leading ASCII whitespace and a sign, then reads digits
/// up to the first non-digit; anything after is ignored. Text with no
/// digits is an `InvalidInteger` error.
pub fn parse_int(text: &str) -> EvalResult<i64> {
    let trimmed = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let sign_len = usize::from(matches!(trimmed.as_bytes().first(), Some(b'+' | b'-')));
    let digit_len = trimmed.as_bytes()[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digit_len == 0 {
        return Err(invalid_integer(text));
    }
    trimmed[..sign_len + digit_len]
        .parse::<i64>()
        .map_err(|_| integer_overflow("integer conversion"))
}

fn add(left: &Value, right: &Value) -> EvalResult {
    if left.is_int() && right.is_int() {
        int_arith(left, right, i64::checked_add, "addition")
    } else {
        Ok(Value::string(format!("{}{}", left.text(), right.text())))
    }
}

#[inline]
fn int_arith(
    left: &Value,
    right: &Value,
    op: fn(i64, i64) -> Option<i64>,
    op_name: &'static str,
) -> EvalResult {
    let (a, b) = (parse_int(left.text())?, parse_int(right.text())?);
    op(a, b)
        .map(Value::from_i64)
        .ok_or_else(|| integer_overflow(op_name))
}

/// Division-like operation that evaluates to `0` when the divisor is zero.
#[inline]
fn zero_guarded(
    left: &Value,
    right: &Value,
    op: fn(i64, i64) -> Option<i64>,
    op_name: &'static str,
) -> EvalResult {
    let (a, b) = (parse_int(left.text())?, parse_int(right.text())?);
    if b == 0 {
        return Ok(Value::int_zero());
    }
    op(a, b)
        .map(Value::from_i64)
        .ok_or_else(|| integer_overflow(op_name))
}

/// 2^63: the first magnitude outside `i64` (exactly representable in f64).
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Integer power computed in floating point, truncated toward zero.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    reason = "power is defined through f64 and range-checked before the cast back"
)]
fn power(left: &Value, right: &Value) -> EvalResult {
    let (base, exp) = (parse_int(left.text())?, parse_int(right.text())?);
    let raw = (base as f64).powf(exp as f64).trunc();
    if raw.is_finite() && (-I64_BOUND..I64_BOUND).contains(&raw) {
        Ok(Value::from_i64(raw as i64))
    } else {
        Err(integer_overflow("exponentiation"))
    }
}

fn compare(op: TokenKind, left: &Value, right: &Value) -> EvalResult {
    let ordering = if left.is_int() && right.is_int() {
        parse_int(left.text())?.cmp(&parse_int(right.text())?)
    } else {
        left.text().cmp(right.text())
    };
    let holds = match op {
        TokenKind::Lt => ordering == Ordering::Less,
        TokenKind::LtEq => ordering != Ordering::Greater,
        TokenKind::Gt => ordering == Ordering::Greater,
        TokenKind::GtEq => ordering != Ordering::Less,
        TokenKind::EqEq => ordering == Ordering::Equal,
        TokenKind::NotEq => ordering != Ordering::Equal,
        _ => return Err(unrecognized_operator(op)),
    };
    Ok(Value::from_bool(holds))
}
