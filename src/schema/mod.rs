//! Schema definitions for validation.
//!
//! Every schema is a node implementing [`SchemaLike`]. Leaf schemas check a
//! single value; composites hold child schemas behind [`SchemaRef`] and report
//! every issue their children find, each at the child's path.
//!
//! # Example
//!
//! ```rust
//! use assay::{parse, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::object()
//!     .field("id", Schema::integer())
//!     .field("tags", Schema::array(Schema::string()));
//!
//! let result = parse(&schema, &json!({"id": 7, "tags": ["a", "b"]}));
//! assert!(result.is_success());
//! ```

mod array;
mod combinators;
mod object;
mod primitive;
pub mod transform;
mod traits;

use serde_json::Value;

pub use array::{ArraySchema, TupleSchema};
pub use combinators::{IntersectionSchema, OptionalSchema, UnionSchema};
pub use object::{MergeSchema, ObjectSchema, RecordSchema};
pub use primitive::{EnumSchema, LiteralSchema, TypeSchema};
pub use traits::{SchemaKind, SchemaLike, SchemaRef, Shape, Structure};

use crate::action::{Action, PipeSchema};
use crate::value::ValueKind;

/// Entry point for creating validation schemas.
///
/// `Schema` provides factory methods for every built-in schema kind. Composite
/// factories take their children by value and share them internally, so a
/// finished schema tree is cheap to clone and safe to use from many threads.
///
/// # Example
///
/// ```rust
/// use assay::{action, parse, Schema};
/// use serde_json::json;
///
/// let user = Schema::object()
///     .field("name", Schema::pipe(Schema::string(), vec![action::trim(), action::non_empty()]))
///     .field("role", Schema::enumeration(["admin", "member"]))
///     .optional("age", Schema::integer());
///
/// let out = parse(&user, &json!({"name": "  Ada ", "role": "admin"})).into_result().unwrap();
/// assert_eq!(out, json!({"name": "Ada", "role": "admin"}));
/// ```
pub struct Schema;

impl Schema {
    /// Creates a schema accepting any string.
    pub fn string() -> TypeSchema {
        TypeSchema::new(ValueKind::String)
    }

    /// Creates a schema accepting any number, integral or not.
    pub fn number() -> TypeSchema {
        TypeSchema::new(ValueKind::Number)
    }

    /// Creates a schema accepting numbers with no fractional part.
    ///
    /// # Example
    ///
    /// ```rust
    /// use assay::{parse, Schema};
    /// use serde_json::json;
    ///
    /// let schema = Schema::integer();
    ///
    /// assert!(parse(&schema, &json!(50)).is_success());
    /// assert!(parse(&schema, &json!(2.0)).is_success());
    ///
    /// // Fractional values are rejected
    /// assert!(parse(&schema, &json!(1.5)).is_failure());
    /// ```
    pub fn integer() -> TypeSchema {
        TypeSchema::new(ValueKind::Integer)
    }

    /// Creates a schema accepting `true` and `false`.
    pub fn boolean() -> TypeSchema {
        TypeSchema::new(ValueKind::Boolean)
    }

    /// Creates a schema accepting only the absent value.
    pub fn null() -> TypeSchema {
        TypeSchema::new(ValueKind::Null)
    }

    /// Creates a schema accepting exactly `value`.
    pub fn literal(value: impl Into<Value>) -> LiteralSchema {
        LiteralSchema::new(value)
    }

    /// Creates a schema accepting one string out of `values`.
    pub fn enumeration<I, S>(values: I) -> EnumSchema
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EnumSchema::new(values)
    }

    /// Creates an object schema with no fields; undeclared keys are ignored.
    pub fn object() -> ObjectSchema {
        ObjectSchema::new()
    }

    /// Creates an object schema with no fields; undeclared keys are rejected.
    pub fn strict_object() -> ObjectSchema {
        ObjectSchema::new().strict()
    }

    /// Creates a schema for objects whose values all match `value`.
    pub fn record<S>(value: S) -> RecordSchema
    where
        S: SchemaLike + 'static,
    {
        RecordSchema::new(value)
    }

    /// Creates a schema for arrays whose items all match `item`.
    pub fn array<S>(item: S) -> ArraySchema
    where
        S: SchemaLike + 'static,
    {
        ArraySchema::new(item)
    }

    /// Creates a schema for arrays with one schema per position.
    pub fn tuple(items: Vec<SchemaRef>) -> TupleSchema {
        TupleSchema::new(items)
    }

    /// Creates a schema accepting whatever the first matching member accepts.
    pub fn union(members: Vec<SchemaRef>) -> UnionSchema {
        UnionSchema::new(members)
    }

    /// Creates a schema that also accepts the absent value.
    pub fn optional<S>(inner: S) -> OptionalSchema
    where
        S: SchemaLike + 'static,
    {
        OptionalSchema::new(inner)
    }

    /// Creates a schema requiring both `left` and `right` to accept.
    pub fn intersection<A, B>(left: A, right: B) -> IntersectionSchema
    where
        A: SchemaLike + 'static,
        B: SchemaLike + 'static,
    {
        IntersectionSchema::new(left, right)
    }

    /// Merges two object schemas; `right` wins on shared keys.
    pub fn merge(left: ObjectSchema, right: ObjectSchema) -> MergeSchema {
        MergeSchema::new(left, right)
    }

    /// Runs `actions` in order over the output of `schema`.
    pub fn pipe<S>(schema: S, actions: Vec<Action>) -> PipeSchema
    where
        S: SchemaLike + 'static,
    {
        actions
            .into_iter()
            .fold(PipeSchema::new(schema), PipeSchema::then)
    }
}

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Schema>();
    assert_send_sync::<TypeSchema>();
    assert_send_sync::<ObjectSchema>();
    assert_send_sync::<UnionSchema>();
    assert_send_sync::<SchemaRef>();
};
