//! Post-validation refinements and transforms.
//!
//! An [`Action`] takes the output of a schema and either passes a (possibly
//! new) value along or fails. A [`PipeSchema`] runs a base schema followed by
//! its actions in order, stopping at the first failure.
//!
//! Actions are grouped by the kind of value they expect:
//!
//! - generic actions live here ([`transform`], [`check`], [`raw_transform`])
//! - [`string`] holds string and length actions
//! - [`number`] holds bounds, divisibility and numeric transforms
//! - [`array`] holds item-wise utilities
//!
//! An action handed a value of the wrong kind reports `invalid_type`.
//!
//! # Example
//!
//! ```rust
//! use assay::{action, parse, IssueKind, Schema};
//! use serde_json::json;
//!
//! let age = Schema::pipe(
//!     Schema::number(),
//!     vec![action::min_value(0.0), action::integer()],
//! );
//!
//! assert!(parse(&age, &json!(42)).is_success());
//!
//! // The first failing action stops the pipe
//! let issues = parse(&age, &json!(-1.5)).into_result().unwrap_err();
//! assert_eq!(issues.codes(), vec![IssueKind::TooSmall]);
//! ```

pub mod array;
pub mod number;
pub mod string;

use std::sync::Arc;

use serde_json::Value;
use stillwater::Validation;

use crate::context::Context;
use crate::error::Issue;
use crate::result::ParseResult;
use crate::schema::{SchemaKind, SchemaLike, SchemaRef};
use crate::value::ValueKind;

pub use array::{filter_items, find_item, map_items, reduce_items, sort_items, sort_items_by};
pub use number::{abs, clamp, finite, integer, max_value, min_value, multiple_of};
pub use string::{
    length, max_length, min_length, non_empty, pattern, pattern_with_message, to_lower_case,
    to_upper_case, trim, trim_end, trim_start,
};

/// A single pipeline step.
pub type Action = Arc<dyn Fn(Value, &mut Context) -> ParseResult<Value> + Send + Sync>;

/// A schema followed by a sequence of actions.
///
/// The base schema runs first; if it fails, its failure is returned as is.
/// Its output is then threaded through each action with the same context, and
/// the first action failure ends the pipe.
///
/// # Example
///
/// ```rust
/// use assay::{action, parse, PipeSchema, Schema};
/// use serde_json::json;
///
/// let slug = PipeSchema::new(Schema::string())
///     .then(action::trim())
///     .then(action::to_lower_case());
///
/// assert_eq!(parse(&slug, &json!("  Hello ")).into_result().unwrap(), json!("hello"));
/// ```
#[derive(Clone)]
pub struct PipeSchema {
    schema: SchemaRef,
    actions: Vec<Action>,
}

impl PipeSchema {
    /// Creates a pipe with no actions over `schema`.
    pub fn new<S>(schema: S) -> Self
    where
        S: SchemaLike + 'static,
    {
        Self::from_ref(Arc::new(schema))
    }

    /// Creates a pipe with no actions over an already-shared schema.
    pub fn from_ref(schema: SchemaRef) -> Self {
        Self {
            schema,
            actions: Vec::new(),
        }
    }

    /// Appends an action.
    pub fn then(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Returns the base schema.
    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    /// Returns the number of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if the pipe has no actions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl SchemaLike for PipeSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Pipe
    }

    fn validate(&self, value: &Value, ctx: &mut Context) -> ParseResult<Value> {
        let mut current = match self.schema.validate(value, ctx) {
            Validation::Success(v) => v,
            failure => return failure,
        };

        for action in &self.actions {
            current = match action(current, ctx) {
                Validation::Success(v) => v,
                failure => return failure,
            };
        }

        ctx.ok(current)
    }
}

/// Wraps a function with full access to the context as an action.
///
/// # Example
///
/// ```rust
/// use assay::{action, parse, Issue, Schema};
/// use serde_json::json;
///
/// let even = action::raw_transform(|value, ctx| match value.as_i64() {
///     Some(n) if n % 2 == 0 => ctx.ok(value),
///     _ => ctx.fail(Issue::custom(ctx.path().clone(), "expected an even number")),
/// });
///
/// let schema = Schema::pipe(Schema::integer(), vec![even]);
/// assert!(parse(&schema, &json!(4)).is_success());
/// assert!(parse(&schema, &json!(5)).is_failure());
/// ```
pub fn raw_transform<F>(f: F) -> Action
where
    F: Fn(Value, &mut Context) -> ParseResult<Value> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Replaces the value with `f(value)`. Never fails.
pub fn transform<F>(f: F) -> Action
where
    F: Fn(Value) -> Value + Send + Sync + 'static,
{
    raw_transform(move |value, ctx| ctx.ok(f(value)))
}

/// Fails with a `custom` issue carrying `message` when `predicate` rejects the value.
///
/// # Example
///
/// ```rust
/// use assay::{action, parse, Schema};
/// use serde_json::json;
///
/// let password = Schema::pipe(
///     Schema::string(),
///     vec![action::check(
///         |v| v.as_str().map_or(false, |s| s.chars().any(char::is_numeric)),
///         "must contain a digit",
///     )],
/// );
///
/// let issues = parse(&password, &json!("secret")).into_result().unwrap_err();
/// assert_eq!(issues.first().message, "must contain a digit");
/// ```
pub fn check<F>(predicate: F, message: impl Into<String>) -> Action
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    let message = message.into();
    raw_transform(move |value, ctx| {
        if predicate(&value) {
            ctx.ok(value)
        } else {
            ctx.fail(Issue::custom(ctx.path().clone(), message.clone()))
        }
    })
}

/// Tags the output as branded with `B`. Identity at validation time.
///
/// Deserialize the output into [`Brand<T, B>`](crate::Brand) to carry the tag
/// in the type system.
pub fn brand<B: 'static>() -> Action {
    identity()
}

/// Tags the output as flavored with `F`. Identity at validation time.
pub fn flavor<F: 'static>() -> Action {
    identity()
}

/// Marks the output as read-only. Identity at validation time.
pub fn readonly() -> Action {
    identity()
}

fn identity() -> Action {
    raw_transform(|value, ctx| ctx.ok(value))
}

/// Fails with an `invalid_type` issue for an action that cannot handle `value`.
pub(crate) fn wrong_kind(ctx: &Context, expected: &str, value: &Value) -> ParseResult<Value> {
    ctx.fail(Issue::invalid_type(
        ctx.path().clone(),
        expected,
        ValueKind::of(value).as_str(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IssueKind;
    use crate::result::ParseResultExt;
    use crate::schema::Schema;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn run(schema: &dyn SchemaLike, value: Value) -> ParseResult<Value> {
        schema.validate(&value, &mut Context::root())
    }

    #[test]
    fn test_empty_pipe_is_base_schema() {
        let schema = PipeSchema::new(Schema::string());
        assert!(schema.is_empty());
        assert_eq!(run(&schema, json!("x")).unwrap_value(), json!("x"));
        assert!(run(&schema, json!(1)).is_failure());
    }

    #[test]
    fn test_base_failure_skips_actions() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let schema = Schema::pipe(
            Schema::string(),
            vec![transform(move |v| {
                counter.fetch_add(1, Ordering::SeqCst);
                v
            })],
        );

        assert!(run(&schema, json!(5)).is_failure());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_actions_run_in_order() {
        let schema = Schema::pipe(
            Schema::number(),
            vec![
                transform(|v| json!(v.as_i64().unwrap_or(0) + 1)),
                transform(|v| json!(v.as_i64().unwrap_or(0) * 10)),
            ],
        );
        assert_eq!(run(&schema, json!(1)).unwrap_value(), json!(20));
    }

    #[test]
    fn test_first_action_failure_wins() {
        let schema = Schema::pipe(
            Schema::string(),
            vec![check(|_| false, "first"), check(|_| false, "second")],
        );
        let issues = run(&schema, json!("x")).unwrap_issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues.first().message, "first");
        assert_eq!(issues.first().code, IssueKind::Custom);
    }

    #[test]
    fn test_markers_are_identity() {
        struct Email;
        let schema = Schema::pipe(
            Schema::string(),
            vec![brand::<Email>(), flavor::<Email>(), readonly()],
        );
        assert_eq!(run(&schema, json!("a@b.c")).unwrap_value(), json!("a@b.c"));
    }

    #[test]
    fn test_wrong_kind_is_invalid_type() {
        let issues = wrong_kind(&Context::root(), "string", &json!(1)).unwrap_issues();
        assert_eq!(issues.first().code, IssueKind::InvalidType);
        assert_eq!(issues.first().message, "expected string, got number");
    }
}
