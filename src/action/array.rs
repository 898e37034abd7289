//! Item-wise array utilities.
//!
//! Callbacks receive each item together with its zero-based index.

use std::cmp::Ordering;

use serde_json::Value;

use super::{raw_transform, wrong_kind, Action};

fn on_items<F>(f: F) -> Action
where
    F: Fn(Vec<Value>) -> Value + Send + Sync + 'static,
{
    raw_transform(move |value, ctx| match value {
        Value::Array(items) => ctx.ok(f(items)),
        other => wrong_kind(ctx, "array", &other),
    })
}

/// Replaces each item with `f(item, index)`.
///
/// # Example
///
/// ```rust
/// use assay::{action, parse, Schema};
/// use serde_json::json;
///
/// let doubled = Schema::pipe(
///     Schema::array(Schema::integer()),
///     vec![action::map_items(|v, _| json!(v.as_i64().unwrap_or(0) * 2))],
/// );
///
/// assert_eq!(parse(&doubled, &json!([1, 2, 3])).into_result().unwrap(), json!([2, 4, 6]));
/// ```
pub fn map_items<F>(f: F) -> Action
where
    F: Fn(Value, usize) -> Value + Send + Sync + 'static,
{
    on_items(move |items| {
        Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| f(item, i))
                .collect(),
        )
    })
}

/// Keeps the items for which `predicate(item, index)` holds.
pub fn filter_items<F>(predicate: F) -> Action
where
    F: Fn(&Value, usize) -> bool + Send + Sync + 'static,
{
    on_items(move |items| {
        Value::Array(
            items
                .into_iter()
                .enumerate()
                .filter(|(i, item)| predicate(item, *i))
                .map(|(_, item)| item)
                .collect(),
        )
    })
}

/// Replaces the array with its first item matching `predicate`, or `null`.
pub fn find_item<F>(predicate: F) -> Action
where
    F: Fn(&Value, usize) -> bool + Send + Sync + 'static,
{
    on_items(move |items| {
        items
            .into_iter()
            .enumerate()
            .find(|(i, item)| predicate(item, *i))
            .map(|(_, item)| item)
            .unwrap_or(Value::Null)
    })
}

/// Folds the items into one value, starting from `initial`.
///
/// # Example
///
/// ```rust
/// use assay::{action, parse, Schema};
/// use serde_json::json;
///
/// let total = Schema::pipe(
///     Schema::array(Schema::number()),
///     vec![action::reduce_items(
///         |acc, v, _| json!(acc.as_f64().unwrap_or(0.0) + v.as_f64().unwrap_or(0.0)),
///         json!(0.0),
///     )],
/// );
///
/// assert_eq!(parse(&total, &json!([1, 2.5])).into_result().unwrap(), json!(3.5));
/// ```
pub fn reduce_items<F>(f: F, initial: Value) -> Action
where
    F: Fn(Value, Value, usize) -> Value + Send + Sync + 'static,
{
    on_items(move |items| {
        items
            .into_iter()
            .enumerate()
            .fold(initial.clone(), |acc, (i, item)| f(acc, item, i))
    })
}

/// Sorts numbers numerically and strings lexicographically.
///
/// Numbers come before strings, and strings before every other kind. The sort
/// is stable, so items of the other kinds keep their relative order.
///
/// # Example
///
/// ```rust
/// use assay::{action, parse, Schema};
/// use serde_json::json;
///
/// let sorted = Schema::pipe(
///     Schema::array(Schema::optional(Schema::number())),
///     vec![action::sort_items()],
/// );
/// let out = parse(&sorted, &json!([3, null, 1])).into_result().unwrap();
/// assert_eq!(out, json!([1, 3, null]));
/// ```
pub fn sort_items() -> Action {
    sort_items_by(natural_order)
}

/// Sorts the items with `compare`. The sort is stable.
pub fn sort_items_by<F>(compare: F) -> Action
where
    F: Fn(&Value, &Value) -> Ordering + Send + Sync + 'static,
{
    on_items(move |mut items| {
        items.sort_by(|a, b| compare(a, b));
        Value::Array(items)
    })
}

fn natural_order(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.total_cmp(&y)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => sort_rank(a).cmp(&sort_rank(b)),
    }
}

fn sort_rank(value: &Value) -> u8 {
    match value {
        Value::Number(_) => 0,
        Value::String(_) => 1,
        _ => 2,
    }
}
