//! Runtime classification of untyped values.
//!
//! Leaf schemas never inspect a `serde_json::Value` directly. They ask
//! [`ValueKind::of`] for the runtime kind of a value and [`ValueKind::matches`]
//! for the exact-type check.

use std::fmt::{self, Display};

use serde_json::{Number, Value};

/// The value a missing key is validated as.
pub(crate) static ABSENT: Value = Value::Null;

/// The runtime kind of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// The absent value: JSON `null` or a missing key.
    Null,
    Boolean,
    Number,
    /// A number with no fractional part. Never returned by [`ValueKind::of`];
    /// used only as an expected kind.
    Integer,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Classifies a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Returns true if `value` is exactly of this kind.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (ValueKind::Integer, Value::Number(n)) => is_integral(n),
            (kind, value) => *kind == ValueKind::of(value),
        }
    }

    /// Returns the tag name used in issue messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::Integer => "integer",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true if the number has no fractional part.
pub(crate) fn is_integral(n: &Number) -> bool {
    if n.is_i64() || n.is_u64() {
        return true;
    }
    n.as_f64()
        .map(|f| f.is_finite() && f.fract() == 0.0)
        .unwrap_or(false)
}

/// Builds a number value from `x`, keeping the representation of `original`.
///
/// Integer inputs stay integers when the result is integral; float inputs
/// stay floats. Returns `Value::Null` if `x` cannot be represented in JSON.
pub(crate) fn renumber(original: &Number, x: f64) -> Value {
    if !original.is_f64() && x.fract() == 0.0 {
        if x >= 0.0 && x <= u64::MAX as f64 {
            if original.is_u64() || x > i64::MAX as f64 {
                return Value::from(x as u64);
            }
            return Value::from(x as i64);
        }
        if x >= i64::MIN as f64 {
            return Value::from(x as i64);
        }
    }
    Number::from_f64(x).map(Value::Number).unwrap_or(Value::Null)
}

/// Compares two values for literal equality. Numbers compare by numeric value
/// so that `1` and `1.0` are the same literal.
pub(crate) fn same_literal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => x.as_f64() == y.as_f64(),
        },
        _ => a == b,
    }
}
