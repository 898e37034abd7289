//! Numeric bounds, checks and transforms.
//!
//! Bounds are given as `f64`. Transforms keep the number's representation:
//! an integer input stays an integer whenever the result is integral.

use serde_json::{Number, Value};

use crate::context::Context;
use crate::error::{Issue, IssueKind};
use crate::value::{is_integral, renumber};

use super::{raw_transform, wrong_kind, Action};

fn on_number<F>(f: F) -> Action
where
    F: Fn(&Number, &mut Context) -> Option<Issue> + Send + Sync + 'static,
{
    raw_transform(move |value, ctx| {
        let issue = match &value {
            Value::Number(n) => f(n, ctx),
            _ => return wrong_kind(ctx, "number", &value),
        };
        match issue {
            Some(issue) => ctx.fail(issue),
            None => ctx.ok(value),
        }
    })
}

fn as_f64(n: &Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}

/// Requires the number to be at least `min`.
///
/// # Example
///
/// ```rust
/// use assay::{action, parse, IssueKind, Schema};
/// use serde_json::json;
///
/// let schema = Schema::pipe(Schema::number(), vec![action::min_value(18.0)]);
///
/// let issues = parse(&schema, &json!(12)).into_result().unwrap_err();
/// assert_eq!(issues.first().code, IssueKind::TooSmall);
/// assert_eq!(issues.first().message, "expected >= 18");
/// ```
pub fn min_value(min: f64) -> Action {
    on_number(move |n, ctx| {
        (as_f64(n) < min).then(|| {
            Issue::too_small(ctx.path().clone(), format!("expected >= {}", min))
                .with_got(n.to_string())
        })
    })
}

/// Requires the number to be at most `max`.
pub fn max_value(max: f64) -> Action {
    on_number(move |n, ctx| {
        (as_f64(n) > max).then(|| {
            Issue::too_big(ctx.path().clone(), format!("expected <= {}", max))
                .with_got(n.to_string())
        })
    })
}

/// Requires the number to be a whole multiple of `step`.
///
/// Floating-point quotients within `1e-9` of a whole number count. A zero
/// step accepts nothing.
pub fn multiple_of(step: f64) -> Action {
    on_number(move |n, ctx| {
        let quotient = as_f64(n) / step;
        let whole = quotient.is_finite() && (quotient - quotient.round()).abs() < 1e-9;
        (!whole).then(|| {
            Issue::new(
                IssueKind::NotMultipleOf,
                ctx.path().clone(),
                format!("expected multiple of {}", step),
            )
            .with_got(n.to_string())
        })
    })
}

/// Requires the number to have no fractional part.
pub fn integer() -> Action {
    on_number(|n, ctx| {
        (!is_integral(n)).then(|| {
            Issue::new(IssueKind::NotInteger, ctx.path().clone(), "expected integer")
                .with_got(n.to_string())
        })
    })
}

/// Requires the number to be finite.
pub fn finite() -> Action {
    on_number(|n, ctx| {
        (!as_f64(n).is_finite()).then(|| {
            Issue::new(IssueKind::NotFinite, ctx.path().clone(), "expected finite number")
        })
    })
}

/// Limits the number to `[min, max]`. Never fails on numbers.
///
/// # Example
///
/// ```rust
/// use assay::{action, parse, Schema};
/// use serde_json::json;
///
/// let percent = Schema::pipe(Schema::integer(), vec![action::clamp(0.0, 100.0)]);
///
/// assert_eq!(parse(&percent, &json!(140)).into_result().unwrap(), json!(100));
/// assert_eq!(parse(&percent, &json!(-3)).into_result().unwrap(), json!(0));
/// ```
pub fn clamp(min: f64, max: f64) -> Action {
    raw_transform(move |value, ctx| {
        let n = match &value {
            Value::Number(n) => n,
            _ => return wrong_kind(ctx, "number", &value),
        };
        let x = as_f64(n);
        let clamped = x.max(min).min(max);
        if clamped == x {
            ctx.ok(value)
        } else {
            ctx.ok(renumber(n, clamped))
        }
    })
}

/// Replaces the number with its absolute value. Never fails on numbers.
pub fn abs() -> Action {
    raw_transform(|value, ctx| {
        let n = match &value {
            Value::Number(n) => n,
            _ => return wrong_kind(ctx, "number", &value),
        };
        let out = if let Some(i) = n.as_i64() {
            Value::from(i.unsigned_abs())
        } else if n.is_u64() {
            value.clone()
        } else {
            renumber(n, as_f64(n).abs())
        };
        ctx.ok(out)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{ParseResult, ParseResultExt};
    use serde_json::json;

    fn apply(action: &Action, value: Value) -> ParseResult<Value> {
        action(value, &mut Context::root())
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(apply(&min_value(0.0), json!(0)).is_success());
        assert!(apply(&max_value(10.0), json!(10)).is_success());

        let issues = apply(&max_value(10.0), json!(10.5)).unwrap_issues();
        assert_eq!(issues.first().code, IssueKind::TooBig);
        assert_eq!(issues.first().message, "expected <= 10");
    }

    #[test]
    fn test_multiple_of() {
        assert!(apply(&multiple_of(5.0), json!(15)).is_success());
        assert!(apply(&multiple_of(0.1), json!(0.3)).is_success());

        let issues = apply(&multiple_of(5.0), json!(12)).unwrap_issues();
        assert_eq!(issues.first().code, IssueKind::NotMultipleOf);
        assert_eq!(issues.first().message, "expected multiple of 5");

        assert!(apply(&multiple_of(0.0), json!(0)).is_failure());
    }

    #[test]
    fn test_integer_check() {
        assert!(apply(&integer(), json!(3)).is_success());
        assert!(apply(&integer(), json!(3.0)).is_success());
        let issues = apply(&integer(), json!(3.5)).unwrap_issues();
        assert_eq!(issues.first().code, IssueKind::NotInteger);
    }

    #[test]
    fn test_finite_accepts_json_numbers() {
        assert!(apply(&finite(), json!(1.5)).is_success());
        assert!(apply(&finite(), json!(u64::MAX)).is_success());
    }

    #[test]
    fn test_number_actions_reject_non_numbers() {
        for action in [min_value(0.0), integer(), finite(), clamp(0.0, 1.0), abs()] {
            let issues = apply(&action, json!("1")).unwrap_issues();
            assert_eq!(issues.first().code, IssueKind::InvalidType);
            assert_eq!(issues.first().expected.as_deref(), Some("number"));
        }
    }

    #[test]
    fn test_clamp_keeps_representation() {
        assert_eq!(apply(&clamp(0.0, 10.0), json!(12)).unwrap_value(), json!(10));
        assert_eq!(apply(&clamp(0.0, 10.0), json!(12.5)).unwrap_value(), json!(10.0));
        assert_eq!(apply(&clamp(0.0, 10.0), json!(4)).unwrap_value(), json!(4));
    }

    #[test]
    fn test_abs() {
        assert_eq!(apply(&abs(), json!(-4)).unwrap_value(), json!(4));
        assert_eq!(apply(&abs(), json!(-2.5)).unwrap_value(), json!(2.5));
        assert_eq!(apply(&abs(), json!(i64::MIN)).unwrap_value(), json!(9223372036854775808u64));
    }
}
