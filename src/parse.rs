//! Entry points for running a schema against a value.

use serde::de::DeserializeOwned;
use serde_json::Value;
use stillwater::Validation;
use tracing::debug;

use crate::context::Context;
use crate::error::{Issue, ParseError};
use crate::path::Path;
use crate::result::ParseResult;
use crate::schema::SchemaLike;

/// Validates `value` against `schema` from a fresh root context.
///
/// Never panics on malformed input: every mismatch is reported as an issue.
///
/// # Example
///
/// ```rust
/// use assay::{parse, Schema};
/// use serde_json::json;
///
/// let schema = Schema::object().field("email", Schema::string());
///
/// match parse(&schema, &json!({"email": 42})) {
///     stillwater::Validation::Success(v) => println!("valid: {}", v),
///     stillwater::Validation::Failure(issues) => {
///         for issue in &issues {
///             println!("{}", issue);
///         }
///     }
/// }
/// ```
pub fn parse<S>(schema: &S, value: &Value) -> ParseResult<Value>
where
    S: SchemaLike + ?Sized,
{
    let mut ctx = Context::root();
    let result = schema.validate(value, &mut ctx);
    if let Validation::Failure(issues) = &result {
        debug!(kind = %schema.kind(), issues = issues.len(), "parse failed");
    }
    result
}

/// Returns true if `value` conforms to `schema`.
pub fn is<S>(schema: &S, value: &Value) -> bool
where
    S: SchemaLike + ?Sized,
{
    parse(schema, value).is_success()
}

/// Validates `value`, turning a failure into a [`ParseError`].
///
/// # Example
///
/// ```rust
/// use assay::{try_parse, Schema};
/// use serde_json::json;
///
/// fn load(raw: &serde_json::Value) -> Result<serde_json::Value, assay::ParseError> {
///     let value = try_parse(&Schema::array(Schema::number()), raw)?;
///     Ok(value)
/// }
///
/// assert!(load(&json!([1, 2])).is_ok());
/// let err = load(&json!([1, "two"])).unwrap_err();
/// assert_eq!(err.issues().first().path.to_string(), "[1]");
/// ```
pub fn try_parse<S>(schema: &S, value: &Value) -> Result<Value, ParseError>
where
    S: SchemaLike + ?Sized,
{
    parse(schema, value).into_result().map_err(ParseError::new)
}

/// Validates `value`, then deserializes the output into `T`.
///
/// A deserialization failure is reported as a `custom` issue at the root.
///
/// # Example
///
/// ```rust
/// use assay::{parse_into, Schema};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Deserialize)]
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// let schema = Schema::object().field("x", Schema::number()).field("y", Schema::number());
/// let point: Point = parse_into(&schema, &json!({"x": 1, "y": 2.5})).into_result().unwrap();
/// assert_eq!(point.y, 2.5);
/// ```
pub fn parse_into<T, S>(schema: &S, value: &Value) -> ParseResult<T>
where
    T: DeserializeOwned,
    S: SchemaLike + ?Sized,
{
    match parse(schema, value) {
        Validation::Success(output) => match serde_json::from_value(output) {
            Ok(typed) => Validation::Success(typed),
            Err(e) => {
                debug!(error = %e, "validated output did not deserialize");
                Context::root().fail(Issue::custom(Path::root(), e.to_string()))
            }
        },
        Validation::Failure(issues) => Validation::Failure(issues),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IssueKind;
    use crate::result::ParseResultExt;
    use crate::schema::Schema;
    use serde_json::json;

    #[test]
    fn test_is() {
        assert!(is(&Schema::string(), &json!("x")));
        assert!(!is(&Schema::string(), &json!(1)));
    }

    #[test]
    fn test_parse_through_schema_ref() {
        let schema = Schema::number().into_ref();
        assert!(parse(&schema, &json!(1)).is_success());
        assert!(parse(schema.as_ref(), &json!(1)).is_success());
    }

    #[test]
    fn test_try_parse_error_message_is_first_issue() {
        let schema = Schema::object()
            .field("a", Schema::string())
            .field("b", Schema::string());
        let err = try_parse(&schema, &json!({})).unwrap_err();
        assert_eq!(err.to_string(), "expected string, got null");
        assert_eq!(err.issues().len(), 2);
    }

    #[test]
    fn test_parse_into_deserialize_failure() {
        let result: ParseResult<u8> = parse_into(&Schema::number(), &json!(1000));
        let issues = result.unwrap_issues();
        assert_eq!(issues.first().code, IssueKind::Custom);
        assert!(issues.first().path.is_root());
    }

    #[test]
    fn test_parse_into_passes_failures_through() {
        let result: ParseResult<String> = parse_into(&Schema::string(), &json!(1));
        assert_eq!(result.unwrap_issues().first().code, IssueKind::InvalidType);
    }
}
