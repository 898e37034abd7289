//! # Assay
//!
//! A composable validation engine that reports ALL the ways a value fails to
//! conform, each with the path where it went wrong.
//!
//! ## Overview
//!
//! You describe the expected shape of untyped data (`serde_json::Value`) with
//! a tree of schemas. Parsing either returns the validated, possibly
//! transformed value, or a non-empty ordered list of [`Issue`]s. Composite
//! schemas visit every child before failing, so one pass reports every
//! problem. Results use stillwater's `Validation` type for applicative error
//! accumulation.
//!
//! ## Core Types
//!
//! - [`Schema`]: entry point for building schemas
//! - [`SchemaLike`]: the trait every schema node implements
//! - [`Context`]: the path and private issue accumulator for one validation step
//! - [`Issue`] / [`Issues`]: a single problem, and a non-empty list of them
//! - [`Path`]: where in the input an issue occurred (e.g. `users[0].email`)
//! - [`action`]: refinements and transforms run after a schema succeeds
//!
//! ## Example
//!
//! ```rust
//! use assay::{action, parse, Schema};
//! use serde_json::json;
//!
//! let user = Schema::object()
//!     .field("name", Schema::pipe(Schema::string(), vec![action::trim(), action::min_length(2)]))
//!     .field("email", Schema::pipe(Schema::string(), vec![action::pattern(r"@").unwrap()]))
//!     .field("tags", Schema::array(Schema::string()));
//!
//! let issues = parse(&user, &json!({
//!     "name": " A ",
//!     "email": "nope",
//!     "tags": ["ok", 7]
//! }))
//! .into_result()
//! .unwrap_err();
//!
//! let paths: Vec<_> = issues.iter().map(|i| i.path.to_string()).collect();
//! assert_eq!(paths, vec!["name", "email", "tags[1]"]);
//! ```

pub mod action;
pub mod context;
pub mod error;
pub mod marker;
pub mod parse;
pub mod path;
pub mod result;
pub mod schema;
pub mod value;

pub use action::{Action, PipeSchema};
pub use context::Context;
pub use error::{Issue, IssueKind, Issues, ParseError};
pub use marker::{Brand, Flavor, Readonly};
pub use parse::{is, parse, parse_into, try_parse};
pub use path::{Path, PathKey};
pub use result::{ParseResult, ParseResultExt};
pub use schema::transform::{deep_partial, deep_required};
pub use schema::{
    ArraySchema, EnumSchema, IntersectionSchema, LiteralSchema, MergeSchema, ObjectSchema,
    OptionalSchema, RecordSchema, Schema, SchemaKind, SchemaLike, SchemaRef, Shape, Structure,
    TupleSchema, TypeSchema, UnionSchema,
};
pub use value::ValueKind;
