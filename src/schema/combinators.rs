//! Schema combinators for composing validation logic.
//!
//! - [`UnionSchema`]: the first member that accepts wins
//! - [`OptionalSchema`]: the absent value is accepted as-is
//! - [`IntersectionSchema`]: both sides must accept, outputs are combined
//!
//! # Example
//!
//! ```rust
//! use assay::{parse, Schema, SchemaLike};
//! use serde_json::json;
//!
//! // Flexible type - string or integer ID
//! let id = Schema::union(vec![Schema::string().into_ref(), Schema::integer().into_ref()]);
//!
//! assert!(parse(&id, &json!("abc")).is_success());
//! assert!(parse(&id, &json!(42)).is_success());
//! assert!(parse(&id, &json!(true)).is_failure());
//! ```

use std::sync::Arc;

use serde_json::Value;
use stillwater::Validation;
use tracing::trace;

use crate::context::Context;
use crate::error::{Issue, IssueKind};
use crate::result::ParseResult;

use super::object::shallow_merge;
use super::traits::{SchemaKind, SchemaLike, SchemaRef, Structure};

/// A schema that accepts a value if any member does.
///
/// Members are tried in order, each in a forked context so a rejected member
/// leaves no trace. The first success is returned unchanged and later members
/// are not run. If every member rejects, the failure starts with one
/// `invalid_union` issue followed by every member's issues in member order.
///
/// # Example
///
/// ```rust
/// use assay::{parse, IssueKind, Schema, SchemaLike};
/// use serde_json::json;
///
/// let schema = Schema::union(vec![Schema::string().into_ref(), Schema::number().into_ref()]);
///
/// let issues = parse(&schema, &json!(null)).into_result().unwrap_err();
/// assert_eq!(
///     issues.codes(),
///     vec![IssueKind::InvalidUnion, IssueKind::InvalidType, IssueKind::InvalidType]
/// );
/// ```
#[derive(Clone)]
pub struct UnionSchema {
    members: Vec<SchemaRef>,
    error_message: Option<String>,
}

impl UnionSchema {
    /// Creates a union over `members`, tried in order.
    pub fn new(members: Vec<SchemaRef>) -> Self {
        Self {
            members,
            error_message: None,
        }
    }

    /// Sets a custom message for the `invalid_union` issue.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Returns the members in trial order.
    pub fn members(&self) -> &[SchemaRef] {
        &self.members
    }
}

impl SchemaLike for UnionSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Union
    }

    fn validate(&self, value: &Value, ctx: &mut Context) -> ParseResult<Value> {
        let mut rejected = Vec::new();

        for (index, member) in self.members.iter().enumerate() {
            let mut trial = ctx.fork();
            match member.validate(value, &mut trial) {
                Validation::Success(v) => return ctx.ok(v),
                Validation::Failure(issues) => {
                    trace!(
                        member = index,
                        kind = %member.kind(),
                        issues = issues.len(),
                        "union member rejected"
                    );
                    rejected.push(issues);
                }
            }
        }

        let message = self
            .error_message
            .clone()
            .unwrap_or_else(|| "no union member matched".to_string());
        ctx.push(Issue::new(IssueKind::InvalidUnion, ctx.path().clone(), message));
        for issues in rejected {
            ctx.absorb(issues);
        }
        ctx.err([])
    }
}

/// A schema that accepts the absent value, or whatever its inner schema accepts.
///
/// `null` and a missing key are both returned as `null` without running the
/// inner schema. Anything else is delegated unchanged.
///
/// # Example
///
/// ```rust
/// use assay::{parse, Schema};
/// use serde_json::json;
///
/// let schema = Schema::optional(Schema::string());
///
/// assert_eq!(parse(&schema, &json!(null)).into_result().unwrap(), json!(null));
/// assert!(parse(&schema, &json!("x")).is_success());
/// assert!(parse(&schema, &json!(1)).is_failure());
/// ```
#[derive(Clone)]
pub struct OptionalSchema {
    inner: SchemaRef,
}

impl OptionalSchema {
    /// Wraps `inner` so that the absent value is also accepted.
    pub fn new<S>(inner: S) -> Self
    where
        S: SchemaLike + 'static,
    {
        Self::from_ref(Arc::new(inner))
    }

    /// Wraps an already-shared schema.
    pub fn from_ref(inner: SchemaRef) -> Self {
        Self { inner }
    }

    /// Returns the wrapped schema.
    pub fn inner(&self) -> &SchemaRef {
        &self.inner
    }
}

impl SchemaLike for OptionalSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Optional
    }

    fn validate(&self, value: &Value, ctx: &mut Context) -> ParseResult<Value> {
        if value.is_null() {
            return ctx.ok(Value::Null);
        }
        self.inner.validate(value, ctx)
    }

    fn structure(&self) -> Structure<'_> {
        Structure::Inner(&self.inner)
    }
}

/// A schema that requires both sides to accept the same value.
///
/// Each side runs in its own forked context. The left side runs first; if it
/// fails, its failure is returned and the right side is not run. When both
/// succeed and both outputs are objects they are merged with the right side's
/// keys winning; otherwise the right output is returned.
///
/// # Example
///
/// ```rust
/// use assay::{parse, Schema};
/// use serde_json::json;
///
/// let named = Schema::object().field("name", Schema::string());
/// let aged = Schema::object().field("age", Schema::integer());
/// let person = Schema::intersection(named, aged);
///
/// let out = parse(&person, &json!({"name": "Ada", "age": 36})).into_result().unwrap();
/// assert_eq!(out, json!({"name": "Ada", "age": 36}));
/// ```
#[derive(Clone)]
pub struct IntersectionSchema {
    left: SchemaRef,
    right: SchemaRef,
}

impl IntersectionSchema {
    /// Creates an intersection of two schemas.
    pub fn new<A, B>(left: A, right: B) -> Self
    where
        A: SchemaLike + 'static,
        B: SchemaLike + 'static,
    {
        Self::from_refs(Arc::new(left), Arc::new(right))
    }

    /// Creates an intersection of two already-shared schemas.
    pub fn from_refs(left: SchemaRef, right: SchemaRef) -> Self {
        Self { left, right }
    }
}

impl SchemaLike for IntersectionSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Intersection
    }

    fn validate(&self, value: &Value, ctx: &mut Context) -> ParseResult<Value> {
        let left = match self.left.validate(value, &mut ctx.fork()) {
            Validation::Success(v) => v,
            failure => return failure,
        };
        let right = match self.right.validate(value, &mut ctx.fork()) {
            Validation::Success(v) => v,
            failure => return failure,
        };
        ctx.ok(shallow_merge(left, right))
    }
}
