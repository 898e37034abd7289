//! Sequence schemas.
//!
//! This module provides [`ArraySchema`] for homogeneous arrays and
//! [`TupleSchema`] for fixed-position arrays.

use std::sync::Arc;

use serde_json::Value;
use stillwater::Validation;

use crate::context::Context;
use crate::error::Issue;
use crate::result::ParseResult;
use crate::value::{ValueKind, ABSENT};

use super::primitive::type_issue;
use super::traits::{SchemaKind, SchemaLike, SchemaRef, Structure};

/// A schema for arrays whose items all match one schema.
///
/// Every item is validated, even after an earlier one fails, and item issues
/// carry the item's index in their path.
///
/// # Example
///
/// ```rust
/// use assay::{parse, Schema};
/// use serde_json::json;
///
/// let tags = Schema::array(Schema::string());
///
/// assert!(parse(&tags, &json!(["a", "b"])).is_success());
///
/// let issues = parse(&tags, &json!(["a", 1, "c", false])).into_result().unwrap_err();
/// let paths: Vec<_> = issues.iter().map(|i| i.path.to_string()).collect();
/// assert_eq!(paths, vec!["[1]", "[3]"]);
/// ```
#[derive(Clone)]
pub struct ArraySchema {
    item: SchemaRef,
    type_error_message: Option<String>,
}

impl ArraySchema {
    /// Creates an array schema whose items must match `item`.
    pub fn new<S>(item: S) -> Self
    where
        S: SchemaLike + 'static,
    {
        Self::from_ref(Arc::new(item))
    }

    /// Creates an array schema from an already-shared item schema.
    pub fn from_ref(item: SchemaRef) -> Self {
        Self {
            item,
            type_error_message: None,
        }
    }

    /// Sets a custom message for the `invalid_type` issue raised for non-arrays.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.type_error_message = Some(message.into());
        self
    }

    /// Returns the item schema.
    pub fn item(&self) -> &SchemaRef {
        &self.item
    }
}

impl SchemaLike for ArraySchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Array
    }

    fn validate(&self, value: &Value, ctx: &mut Context) -> ParseResult<Value> {
        let items = match value.as_array() {
            Some(items) => items,
            None => {
                let message = self.type_error_message.as_deref();
                let issue = type_issue(ctx, ValueKind::Array, value, message);
                ctx.push(issue);
                return ctx.err([]);
            }
        };

        let mut out = Vec::with_capacity(items.len());
        let mut ok = true;
        for (index, item) in items.iter().enumerate() {
            let mut child = ctx.child(index);
            match self.item.validate(item, &mut child) {
                Validation::Success(v) => out.push(v),
                Validation::Failure(issues) => {
                    ok = false;
                    ctx.absorb(issues);
                }
            }
        }

        if ok {
            ctx.ok(Value::Array(out))
        } else {
            ctx.err([])
        }
    }

    fn structure(&self) -> Structure<'_> {
        Structure::Item(&self.item)
    }
}

/// A schema for arrays with one schema per position.
///
/// Every position is validated and all issues are reported. A missing trailing
/// position is validated as `null`, so only optional slots may be left off.
/// Surplus elements produce a single `too_big` issue at the tuple's path.
///
/// # Example
///
/// ```rust
/// use assay::{parse, IssueKind, Schema, SchemaLike};
/// use serde_json::json;
///
/// let point = Schema::tuple(vec![Schema::number().into_ref(), Schema::number().into_ref()]);
///
/// assert!(parse(&point, &json!([1.5, 2])).is_success());
///
/// let issues = parse(&point, &json!([1, 2, 3])).into_result().unwrap_err();
/// assert_eq!(issues.first().code, IssueKind::TooBig);
/// ```
#[derive(Clone)]
pub struct TupleSchema {
    items: Vec<SchemaRef>,
    type_error_message: Option<String>,
}

impl TupleSchema {
    /// Creates a tuple schema from its position schemas.
    pub fn new(items: Vec<SchemaRef>) -> Self {
        Self {
            items,
            type_error_message: None,
        }
    }

    /// Sets a custom message for the `invalid_type` issue raised for non-arrays.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.type_error_message = Some(message.into());
        self
    }

    /// Returns the position schemas.
    pub fn items(&self) -> &[SchemaRef] {
        &self.items
    }
}

impl SchemaLike for TupleSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Tuple
    }

    fn validate(&self, value: &Value, ctx: &mut Context) -> ParseResult<Value> {
        let elements = match value.as_array() {
            Some(elements) => elements,
            None => {
                let message = self.type_error_message.as_deref();
                let issue = type_issue(ctx, ValueKind::Array, value, message);
                ctx.push(issue);
                return ctx.err([]);
            }
        };

        let mut out = Vec::with_capacity(self.items.len());
        let mut ok = true;
        for (index, schema) in self.items.iter().enumerate() {
            let mut child = ctx.child(index);
            let element = elements.get(index).unwrap_or(&ABSENT);
            match schema.validate(element, &mut child) {
                Validation::Success(v) => out.push(v),
                Validation::Failure(issues) => {
                    ok = false;
                    ctx.absorb(issues);
                }
            }
        }

        if elements.len() > self.items.len() {
            ok = false;
            let issue = Issue::too_big(
                ctx.path().clone(),
                format!(
                    "expected at most {} elements, got {}",
                    self.items.len(),
                    elements.len()
                ),
            );
            ctx.push(issue);
        }

        if ok {
            ctx.ok(Value::Array(out))
        } else {
            ctx.err([])
        }
    }
}
