//! Runtime values.
//!
//! SimplePy has two value kinds. Both are stored as text: an integer value
//! is its decimal digit string, exactly as written or as last computed.
//! Operators parse the text on demand.

use std::fmt;

/// Runtime type tag of a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Int,
    Str,
}

impl ValueType {
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Int => "int",
            ValueType::Str => "str",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed value: the runtime type paired with its textual representation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Int(String),
    Str(String),
}

impl Value {
    /// Integer value from its text form. The text is kept verbatim.
    #[inline]
    pub fn int(text: impl Into<String>) -> Self {
        Value::Int(text.into())
    }

    #[inline]
    pub fn string(text: impl Into<String>) -> Self {
        Value::Str(text.into())
    }

    /// Integer value rendered in canonical decimal.
    #[inline]
    pub fn from_i64(n: i64) -> Self {
        Value::Int(n.to_string())
    }

    /// Truth value as the integers `1` / `0`.
    #[inline]
    pub fn from_bool(b: bool) -> Self {
        Value::int(if b { "1" } else { "0" })
    }

    /// Integer zero, the fallback for recovered errors.
    #[inline]
    pub fn int_zero() -> Self {
        Value::int("0")
    }

    #[inline]
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Int(_) => ValueType::Int,
            Value::Str(_) => ValueType::Str,
        }
    }

    #[inline]
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// The textual payload, whatever the type.
    #[inline]
    pub fn text(&self) -> &str {
        match self {
            Value::Int(s) | Value::Str(s) => s,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
