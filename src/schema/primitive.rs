//! Leaf schemas: runtime type checks, literals and string enumerations.

use indexmap::IndexSet;
use serde_json::Value;

use crate::context::Context;
use crate::error::{Issue, IssueKind};
use crate::result::ParseResult;
use crate::value::{same_literal, ValueKind};

use super::traits::{SchemaKind, SchemaLike};

/// A schema that accepts values of exactly one runtime kind.
///
/// Created through [`Schema::string`](crate::Schema::string),
/// [`Schema::number`](crate::Schema::number), [`Schema::integer`](crate::Schema::integer),
/// [`Schema::boolean`](crate::Schema::boolean) and [`Schema::null`](crate::Schema::null).
///
/// # Example
///
/// ```rust
/// use assay::{parse, Schema};
/// use serde_json::json;
///
/// let schema = Schema::integer().error("age must be a whole number");
///
/// assert!(parse(&schema, &json!(30)).is_success());
///
/// let issues = parse(&schema, &json!(30.5)).into_result().unwrap_err();
/// assert_eq!(issues.first().message, "age must be a whole number");
/// ```
#[derive(Debug, Clone)]
pub struct TypeSchema {
    expected: ValueKind,
    type_error_message: Option<String>,
}

impl TypeSchema {
    /// Creates a schema accepting values of the given kind.
    pub fn new(expected: ValueKind) -> Self {
        Self {
            expected,
            type_error_message: None,
        }
    }

    /// Sets a custom message for the `invalid_type` issue.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.type_error_message = Some(message.into());
        self
    }

    /// Returns the accepted kind.
    pub fn expected(&self) -> ValueKind {
        self.expected
    }
}

impl SchemaLike for TypeSchema {
    fn kind(&self) -> SchemaKind {
        match self.expected {
            ValueKind::Null => SchemaKind::Null,
            ValueKind::Boolean => SchemaKind::Boolean,
            ValueKind::Number => SchemaKind::Number,
            ValueKind::Integer => SchemaKind::Integer,
            ValueKind::String => SchemaKind::String,
            ValueKind::Array => SchemaKind::Array,
            ValueKind::Object => SchemaKind::Object,
        }
    }

    fn validate(&self, value: &Value, ctx: &mut Context) -> ParseResult<Value> {
        if self.expected.matches(value) {
            return ctx.ok(value.clone());
        }

        let issue = type_issue(
            ctx,
            self.expected,
            value,
            self.type_error_message.as_deref(),
        );
        ctx.push(issue);
        ctx.err([])
    }
}

/// Builds an `invalid_type` issue at the context's path, honoring a custom message.
pub(crate) fn type_issue(
    ctx: &Context,
    expected: ValueKind,
    value: &Value,
    message: Option<&str>,
) -> Issue {
    let issue = Issue::invalid_type(
        ctx.path().clone(),
        expected.as_str(),
        ValueKind::of(value).as_str(),
    );
    match message {
        Some(message) => Issue {
            message: message.to_string(),
            ..issue
        },
        None => issue,
    }
}

/// A schema that accepts exactly one value.
///
/// Numbers compare by numeric value, so `1` and `1.0` are the same literal.
#[derive(Debug, Clone)]
pub struct LiteralSchema {
    value: Value,
}

impl LiteralSchema {
    /// Creates a schema accepting only `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the accepted literal.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl SchemaLike for LiteralSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Literal
    }

    fn validate(&self, value: &Value, ctx: &mut Context) -> ParseResult<Value> {
        if same_literal(value, &self.value) {
            return ctx.ok(self.value.clone());
        }

        ctx.push(
            Issue::new(
                IssueKind::InvalidLiteral,
                ctx.path().clone(),
                format!("expected literal {}", self.value),
            )
            .with_expected(self.value.to_string())
            .with_got(value.to_string()),
        );
        ctx.err([])
    }
}

/// A schema that accepts one string out of a fixed set.
///
/// # Example
///
/// ```rust
/// use assay::{parse, IssueKind, Schema};
/// use serde_json::json;
///
/// let role = Schema::enumeration(["admin", "editor", "viewer"]);
///
/// assert!(parse(&role, &json!("editor")).is_success());
///
/// let issues = parse(&role, &json!("owner")).into_result().unwrap_err();
/// assert_eq!(issues.first().code, IssueKind::InvalidLiteral);
/// assert_eq!(issues.first().message, "expected one of admin, editor, viewer");
/// ```
#[derive(Debug, Clone)]
pub struct EnumSchema {
    values: IndexSet<String>,
}

impl EnumSchema {
    /// Creates a schema accepting any of `values`.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the accepted values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

impl SchemaLike for EnumSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Enum
    }

    fn validate(&self, value: &Value, ctx: &mut Context) -> ParseResult<Value> {
        let s = match value.as_str() {
            Some(s) => s,
            None => {
                let issue = type_issue(ctx, ValueKind::String, value, None);
                ctx.push(issue);
                return ctx.err([]);
            }
        };

        if self.values.contains(s) {
            return ctx.ok(value.clone());
        }

        let listed = self.values().collect::<Vec<_>>().join(", ");
        ctx.push(
            Issue::new(
                IssueKind::InvalidLiteral,
                ctx.path().clone(),
                format!("expected one of {}", listed),
            )
            .with_expected(listed)
            .with_got(s.to_string()),
        );
        ctx.err([])
    }
}
