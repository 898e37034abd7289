//! Traits for schema polymorphism.
//!
//! This module provides the [`SchemaLike`] trait that lets different schema
//! kinds (leaves, objects, unions, pipes, ...) compose into one recursive tree.

use std::fmt::{self, Display};
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::context::Context;
use crate::result::ParseResult;

/// A shared, type-erased schema node.
pub type SchemaRef = Arc<dyn SchemaLike>;

/// The declared fields of an object-like schema, in declaration order.
pub type Shape = IndexMap<String, SchemaRef>;

/// The closed set of schema kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    String,
    Number,
    Integer,
    Boolean,
    Null,
    Literal,
    Enum,
    Object,
    StrictObject,
    Record,
    Array,
    Tuple,
    Union,
    Optional,
    Intersection,
    Merge,
    Pipe,
    /// A user-defined schema outside the built-in set.
    Custom,
}

impl SchemaKind {
    /// Returns the tag name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::String => "string",
            SchemaKind::Number => "number",
            SchemaKind::Integer => "integer",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Null => "null",
            SchemaKind::Literal => "literal",
            SchemaKind::Enum => "enum",
            SchemaKind::Object => "object",
            SchemaKind::StrictObject => "strict_object",
            SchemaKind::Record => "record",
            SchemaKind::Array => "array",
            SchemaKind::Tuple => "tuple",
            SchemaKind::Union => "union",
            SchemaKind::Optional => "optional",
            SchemaKind::Intersection => "intersection",
            SchemaKind::Merge => "merge",
            SchemaKind::Pipe => "pipe",
            SchemaKind::Custom => "custom",
        }
    }
}

impl Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a schema exposes about its children, for rewriting schema trees.
///
/// [`deep_partial`](crate::deep_partial) and [`deep_required`](crate::deep_required)
/// match on this exhaustively.
pub enum Structure<'a> {
    /// An object-like schema with named fields.
    Shape(&'a Shape),
    /// An array-like schema with one item schema.
    Item(&'a SchemaRef),
    /// An optional wrapper around one inner schema.
    Inner(&'a SchemaRef),
    /// Nothing to recurse into.
    Opaque,
}

/// A schema node that can validate untyped values.
///
/// Implementations are immutable and stateless across calls: everything a
/// single parse needs lives in the [`Context`] passed to `validate`. The
/// `Send + Sync` bounds let one schema tree serve concurrent parses.
///
/// # Example
///
/// ```rust
/// use assay::{parse, Context, ParseResult, Schema, SchemaKind, SchemaLike};
/// use serde_json::{json, Value};
///
/// struct Even;
///
/// impl SchemaLike for Even {
///     fn kind(&self) -> SchemaKind {
///         SchemaKind::Custom
///     }
///
///     fn validate(&self, value: &Value, ctx: &mut Context) -> ParseResult<Value> {
///         match value.as_i64() {
///             Some(n) if n % 2 == 0 => ctx.ok(value.clone()),
///             _ => ctx.fail(assay::Issue::custom(ctx.path().clone(), "expected an even number")),
///         }
///     }
/// }
///
/// let schema = Schema::array(Even);
/// assert!(parse(&schema, &json!([2, 4])).is_success());
/// assert!(parse(&schema, &json!([2, 3])).is_failure());
/// ```
pub trait SchemaLike: Send + Sync {
    /// Returns this schema's kind.
    fn kind(&self) -> SchemaKind;

    /// Validates `value`, reporting issues against `ctx`.
    ///
    /// Returns `Success` with the (possibly transformed) output value, or
    /// `Failure` with every issue found.
    fn validate(&self, value: &Value, ctx: &mut Context) -> ParseResult<Value>;

    /// Exposes child schemas for structural rewriting.
    fn structure(&self) -> Structure<'_> {
        Structure::Opaque
    }

    /// Moves this schema behind a shared reference.
    fn into_ref(self) -> SchemaRef
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

impl<S: SchemaLike + ?Sized> SchemaLike for Arc<S> {
    fn kind(&self) -> SchemaKind {
        (**self).kind()
    }

    fn validate(&self, value: &Value, ctx: &mut Context) -> ParseResult<Value> {
        (**self).validate(value, ctx)
    }

    fn structure(&self) -> Structure<'_> {
        (**self).structure()
    }
}

impl<S: SchemaLike + ?Sized> SchemaLike for Box<S> {
    fn kind(&self) -> SchemaKind {
        (**self).kind()
    }

    fn validate(&self, value: &Value, ctx: &mut Context) -> ParseResult<Value> {
        (**self).validate(value, ctx)
    }

    fn structure(&self) -> Structure<'_> {
        (**self).structure()
    }
}
