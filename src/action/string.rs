//! String actions and length checks.
//!
//! Length checks accept strings (counted in characters) and arrays (counted
//! in items).

use regex::Regex;
use serde_json::Value;

use crate::context::Context;
use crate::error::Issue;
use crate::result::ParseResult;

use super::{raw_transform, wrong_kind, Action};

fn map_str<F>(f: F) -> Action
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    raw_transform(move |value, ctx| match value.as_str() {
        Some(s) => ctx.ok(Value::String(f(s))),
        None => wrong_kind(ctx, "string", &value),
    })
}

/// Strips leading and trailing whitespace.
pub fn trim() -> Action {
    map_str(|s| s.trim().to_string())
}

/// Strips leading whitespace.
pub fn trim_start() -> Action {
    map_str(|s| s.trim_start().to_string())
}

/// Strips trailing whitespace.
pub fn trim_end() -> Action {
    map_str(|s| s.trim_end().to_string())
}

/// Lowercases the string.
pub fn to_lower_case() -> Action {
    map_str(str::to_lowercase)
}

/// Uppercases the string.
pub fn to_upper_case() -> Action {
    map_str(str::to_uppercase)
}

/// Requires the string to match a regular expression.
///
/// A mismatch is a `custom` issue with the message "invalid format". Returns
/// an error if the pattern does not compile.
///
/// # Example
///
/// ```rust
/// use assay::{action, parse, Schema};
/// use serde_json::json;
///
/// let code = Schema::pipe(Schema::string(), vec![action::pattern(r"^[A-Z]{3}$").unwrap()]);
///
/// assert!(parse(&code, &json!("ABC")).is_success());
/// assert!(parse(&code, &json!("abc")).is_failure());
/// ```
pub fn pattern(re: &str) -> Result<Action, regex::Error> {
    pattern_with_message(re, "invalid format")
}

/// Like [`pattern`], with a custom mismatch message.
pub fn pattern_with_message(re: &str, message: impl Into<String>) -> Result<Action, regex::Error> {
    let regex = Regex::new(re)?;
    let message = message.into();
    Ok(raw_transform(move |value, ctx| {
        let matched = match value.as_str() {
            Some(s) => regex.is_match(s),
            None => return wrong_kind(ctx, "string", &value),
        };
        if matched {
            ctx.ok(value)
        } else {
            let issue = Issue::custom(ctx.path().clone(), message.clone())
                .with_expected(format!("string matching '{}'", regex.as_str()));
            ctx.fail(issue)
        }
    }))
}

fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

fn too_short(ctx: &Context, min: usize, len: usize) -> ParseResult<Value> {
    ctx.fail(
        Issue::too_small(ctx.path().clone(), format!("expected length >= {}", min))
            .with_expected(format!("length >= {}", min))
            .with_got(format!("length {}", len)),
    )
}

fn too_long(ctx: &Context, max: usize, len: usize) -> ParseResult<Value> {
    ctx.fail(
        Issue::too_big(ctx.path().clone(), format!("expected length <= {}", max))
            .with_expected(format!("length <= {}", max))
            .with_got(format!("length {}", len)),
    )
}

/// Requires at least `min` characters or items.
pub fn min_length(min: usize) -> Action {
    raw_transform(move |value, ctx| match length_of(&value) {
        Some(len) if len < min => too_short(ctx, min, len),
        Some(_) => ctx.ok(value),
        None => wrong_kind(ctx, "string or array", &value),
    })
}

/// Requires at most `max` characters or items.
pub fn max_length(max: usize) -> Action {
    raw_transform(move |value, ctx| match length_of(&value) {
        Some(len) if len > max => too_long(ctx, max, len),
        Some(_) => ctx.ok(value),
        None => wrong_kind(ctx, "string or array", &value),
    })
}

/// Requires exactly `n` characters or items.
pub fn length(n: usize) -> Action {
    raw_transform(move |value, ctx| match length_of(&value) {
        Some(len) if len < n => too_short(ctx, n, len),
        Some(len) if len > n => too_long(ctx, n, len),
        Some(_) => ctx.ok(value),
        None => wrong_kind(ctx, "string or array", &value),
    })
}

/// Requires at least one character or item. Same as `min_length(1)`.
pub fn non_empty() -> Action {
    min_length(1)
}
