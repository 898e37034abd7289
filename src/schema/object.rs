//! Keyed-structure schemas.
//!
//! This module provides [`ObjectSchema`] for objects with declared fields
//! (loose or strict), [`RecordSchema`] for maps with uniform values, and
//! [`MergeSchema`] for combining two object schemas.

use std::sync::Arc;

use serde_json::{Map, Value};
use stillwater::Validation;

use crate::context::Context;
use crate::error::Issue;
use crate::result::ParseResult;
use crate::value::{ValueKind, ABSENT};

use super::combinators::OptionalSchema;
use super::primitive::type_issue;
use super::traits::{SchemaKind, SchemaLike, SchemaRef, Shape, Structure};

/// A schema for validating JSON objects with declared fields.
///
/// Every declared field is validated, in declaration order, even after an
/// earlier field fails; all field issues are reported together. A missing key
/// is validated as `null`, so only [`optional`](ObjectSchema::optional) fields
/// may be left out.
///
/// Loose objects ignore keys they do not declare and leave them out of the
/// output. Strict objects report each such key as a `custom` issue.
///
/// # Example
///
/// ```rust
/// use assay::{parse, Schema};
/// use serde_json::json;
///
/// let schema = Schema::object()
///     .field("name", Schema::string())
///     .field("age", Schema::integer())
///     .optional("email", Schema::string());
///
/// let result = parse(&schema, &json!({"name": "Alice", "age": 30, "admin": true}));
/// assert_eq!(result.into_result().unwrap(), json!({"name": "Alice", "age": 30}));
///
/// // Both bad fields are reported
/// let issues = parse(&schema, &json!({"name": 1, "age": "x"})).into_result().unwrap_err();
/// assert_eq!(issues.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct ObjectSchema {
    shape: Shape,
    strict: bool,
    type_error_message: Option<String>,
}

impl ObjectSchema {
    /// Creates a new loose object schema with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loose object schema over an existing shape.
    pub fn from_shape(shape: Shape) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }

    /// Adds a field. Re-declaring a name replaces its schema in place.
    pub fn field<S>(self, name: impl Into<String>, schema: S) -> Self
    where
        S: SchemaLike + 'static,
    {
        self.field_ref(name, Arc::new(schema))
    }

    /// Adds a field from an already-shared schema.
    pub fn field_ref(mut self, name: impl Into<String>, schema: SchemaRef) -> Self {
        self.shape.insert(name.into(), schema);
        self
    }

    /// Adds a field that may be absent or `null`.
    ///
    /// Shorthand for `.field(name, Schema::optional(schema))`.
    pub fn optional<S>(self, name: impl Into<String>, schema: S) -> Self
    where
        S: SchemaLike + 'static,
    {
        self.field(name, OptionalSchema::new(schema))
    }

    /// Rejects keys that are not declared.
    ///
    /// # Example
    ///
    /// ```rust
    /// use assay::{parse, IssueKind, Schema};
    /// use serde_json::json;
    ///
    /// let schema = Schema::object().field("name", Schema::string()).strict();
    ///
    /// let issues = parse(&schema, &json!({"name": "x", "extra": 1})).into_result().unwrap_err();
    /// assert_eq!(issues.first().code, IssueKind::Custom);
    /// assert_eq!(issues.first().path.to_string(), "extra");
    /// ```
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Sets a custom message for the `invalid_type` issue raised for non-objects.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.type_error_message = Some(message.into());
        self
    }

    /// Returns the declared fields.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns true if undeclared keys are rejected.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Validates the declared fields of `obj`, absorbing field issues into `ctx`.
    ///
    /// Returns the output map and whether every field passed.
    fn validate_fields(
        &self,
        obj: &Map<String, Value>,
        ctx: &mut Context,
    ) -> (Map<String, Value>, bool) {
        let mut out = Map::new();
        let mut ok = true;

        for (name, schema) in &self.shape {
            let mut child = ctx.child(name);
            let input = obj.get(name);
            match schema.validate(input.unwrap_or(&ABSENT), &mut child) {
                Validation::Success(v) => {
                    if input.is_some() || !v.is_null() {
                        out.insert(name.clone(), v);
                    }
                }
                Validation::Failure(issues) => {
                    ok = false;
                    ctx.absorb(issues);
                }
            }
        }

        (out, ok)
    }
}

impl SchemaLike for ObjectSchema {
    fn kind(&self) -> SchemaKind {
        if self.strict {
            SchemaKind::StrictObject
        } else {
            SchemaKind::Object
        }
    }

    fn validate(&self, value: &Value, ctx: &mut Context) -> ParseResult<Value> {
        let obj = match value.as_object() {
            Some(o) => o,
            None => {
                let message = self.type_error_message.as_deref();
                let issue = type_issue(ctx, ValueKind::Object, value, message);
                ctx.push(issue);
                return ctx.err([]);
            }
        };

        let (out, fields_ok) = self.validate_fields(obj, ctx);
        let keys_ok = !self.strict || reject_unknown_keys(obj, &self.shape, ctx);

        if fields_ok && keys_ok {
            ctx.ok(Value::Object(out))
        } else {
            ctx.err([])
        }
    }

    fn structure(&self) -> Structure<'_> {
        Structure::Shape(&self.shape)
    }
}

/// Pushes a `custom` issue for every key of `obj` not in `shape`.
///
/// Returns true if there were none.
fn reject_unknown_keys(obj: &Map<String, Value>, shape: &Shape, ctx: &mut Context) -> bool {
    let mut ok = true;
    for key in obj.keys() {
        if !shape.contains_key(key) {
            let issue = Issue::custom(ctx.path().push_name(key), format!("unknown key '{}'", key));
            ctx.push(issue);
            ok = false;
        }
    }
    ok
}

/// A schema for objects used as maps: every value must match one schema.
///
/// Entries are visited in input order and every failing entry is reported.
///
/// # Example
///
/// ```rust
/// use assay::{parse, Schema};
/// use serde_json::json;
///
/// let scores = Schema::record(Schema::integer());
///
/// assert!(parse(&scores, &json!({"alice": 3, "bob": 5})).is_success());
///
/// let issues = parse(&scores, &json!({"alice": "three", "bob": 5, "eve": null}))
///     .into_result()
///     .unwrap_err();
/// let paths: Vec<_> = issues.iter().map(|i| i.path.to_string()).collect();
/// assert_eq!(paths, vec!["alice", "eve"]);
/// ```
#[derive(Clone)]
pub struct RecordSchema {
    value: SchemaRef,
    type_error_message: Option<String>,
}

impl RecordSchema {
    /// Creates a record schema whose values must match `value`.
    pub fn new<S>(value: S) -> Self
    where
        S: SchemaLike + 'static,
    {
        Self::from_ref(Arc::new(value))
    }

    /// Creates a record schema from an already-shared value schema.
    pub fn from_ref(value: SchemaRef) -> Self {
        Self {
            value,
            type_error_message: None,
        }
    }

    /// Sets a custom message for the `invalid_type` issue raised for non-objects.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.type_error_message = Some(message.into());
        self
    }
}

impl SchemaLike for RecordSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Record
    }

    fn validate(&self, value: &Value, ctx: &mut Context) -> ParseResult<Value> {
        let obj = match value.as_object() {
            Some(o) => o,
            None => {
                let message = self.type_error_message.as_deref();
                let issue = type_issue(ctx, ValueKind::Object, value, message);
                ctx.push(issue);
                return ctx.err([]);
            }
        };

        let mut out = Map::new();
        let mut ok = true;
        for (key, entry) in obj {
            let mut child = ctx.child(key);
            match self.value.validate(entry, &mut child) {
                Validation::Success(v) => {
                    out.insert(key.clone(), v);
                }
                Validation::Failure(issues) => {
                    ok = false;
                    ctx.absorb(issues);
                }
            }
        }

        if ok {
            ctx.ok(Value::Object(out))
        } else {
            ctx.err([])
        }
    }
}

/// Two object schemas combined, with the second taking precedence.
///
/// Each side runs in its own forked context. The first schema is checked
/// against its fields minus any the second one redeclares; if that fails, its
/// issues are returned and the second schema is not run. Otherwise the second
/// schema is checked, and the two outputs are merged with the second's keys
/// winning. The result is strict if either input was.
///
/// # Example
///
/// ```rust
/// use assay::{parse, Schema};
/// use serde_json::json;
///
/// let base = Schema::object().field("id", Schema::number()).field("tag", Schema::number());
/// let patch = Schema::object().field("tag", Schema::string());
///
/// let merged = Schema::merge(base, patch);
/// let out = parse(&merged, &json!({"id": 1, "tag": "blue"})).into_result().unwrap();
/// assert_eq!(out, json!({"id": 1, "tag": "blue"}));
/// ```
#[derive(Clone)]
pub struct MergeSchema {
    left: ObjectSchema,
    right: ObjectSchema,
    shape: Shape,
    strict: bool,
}

impl MergeSchema {
    /// Combines `left` and `right`; `right` wins on shared keys.
    pub fn new(left: ObjectSchema, right: ObjectSchema) -> Self {
        let strict = left.strict || right.strict;

        let mut shape = left.shape.clone();
        for (name, schema) in &right.shape {
            shape.insert(name.clone(), Arc::clone(schema));
        }

        let remaining: Shape = left
            .shape
            .into_iter()
            .filter(|(name, _)| !right.shape.contains_key(name))
            .collect();

        Self {
            left: ObjectSchema::from_shape(remaining),
            right: ObjectSchema::from_shape(right.shape),
            shape,
            strict,
        }
    }
}

impl SchemaLike for MergeSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Merge
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

        if self.strict {
            if let Some(obj) = value.as_object() {
                let mut keys = ctx.fork();
                if !reject_unknown_keys(obj, &self.shape, &mut keys) {
                    return keys.err([]);
                }
            }
        }

        ctx.ok(shallow_merge(left, right))
    }

    fn structure(&self) -> Structure<'_> {
        Structure::Shape(&self.shape)
    }
}

/// Overlays `right`'s keys onto `left` when both are objects; otherwise returns `right`.
pub(crate) fn shallow_merge(left: Value, right: Value) -> Value {
    match (left, right) {
        (Value::Object(mut base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                base.insert(key, value);
            }
            Value::Object(base)
        }
        (_, right) => right,
    }
}
