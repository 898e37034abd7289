//! Integration tests for Issue, Issues and ParseError.

use assay::{parse, try_parse, Issue, IssueKind, Issues, ParseError, Path, Schema};
use serde_json::json;
use stillwater::prelude::*;

#[test]
fn test_issue_full_context() {
    let issue = Issue::invalid_type(Path::root().push_name("email"), "string", "number");

    assert_eq!(issue.path.to_string(), "email");
    assert_eq!(issue.message, "expected string, got number");
    assert_eq!(issue.code, IssueKind::InvalidType);
    assert_eq!(issue.expected, Some("string".to_string()));
    assert_eq!(issue.got, Some("number".to_string()));
}

#[test]
fn test_issue_wire_format() {
    let path = Path::root().push_name("tags").push_index(2);
    let issue = Issue::too_small(path, "expected length >= 1");
    assert_eq!(
        issue.to_value(),
        json!({"code": "too_small", "message": "expected length >= 1", "path": ["tags", 2]})
    );
}

#[test]
fn test_issues_never_empty() {
    let issues = Issues::single(Issue::custom(Path::root(), "test"));
    assert!(!issues.is_empty());
    assert_eq!(issues.len(), 1);
    assert!(Issues::from_vec(Vec::new()).is_none());
}

#[test]
fn test_issues_combine_via_semigroup() {
    let a = Issues::single(Issue::custom(Path::root().push_name("name"), "name is required"));
    let b = Issues::single(Issue::custom(Path::root().push_name("email"), "email is invalid"));

    let combined = a.combine(b);
    assert_eq!(combined.len(), 2);
    assert_eq!(combined.first().path.to_string(), "name");
}

#[test]
fn test_issues_filtering() {
    let schema = Schema::object()
        .field("a", Schema::string())
        .field("b", Schema::literal(1))
        .field("c", Schema::string());
    let issues = parse(&schema, &json!({"b": 2})).into_result().unwrap_err();

    assert_eq!(issues.with_code(IssueKind::InvalidType).len(), 2);
    assert_eq!(issues.at_path(&Path::root().push_name("b")).len(), 1);
}

#[test]
fn test_issues_display() {
    let issues = Issues::from_vec(vec![
        Issue::custom(Path::root(), "root problem"),
        Issue::custom(Path::root().push_name("x"), "x problem"),
    ])
    .unwrap();

    let rendered = issues.to_string();
    assert!(rendered.starts_with("Validation failed with 2 issue(s):"));
    assert!(rendered.contains("(root): root problem"));
    assert!(rendered.contains("x: x problem"));
}

#[test]
fn test_issues_serialize_as_list() {
    let issues = Issues::single(Issue::custom(Path::root().push_name("k"), "bad"));
    let value = serde_json::to_value(&issues).unwrap();
    assert_eq!(value[0]["code"], json!("custom"));
    assert_eq!(value[0]["path"], json!(["k"]));
    assert_eq!(issues.to_value(), json!([{"code": "custom", "message": "bad", "path": ["k"]}]));
}

#[test]
fn test_parse_error_adapter() {
    let err: ParseError = try_parse(&Schema::array(Schema::string()), &json!([1, 2]))
        .unwrap_err();

    assert_eq!(err.to_string(), "expected string, got number");
    assert_eq!(err.issues().len(), 2);

    let boxed: Box<dyn std::error::Error> = Box::new(err.clone());
    assert_eq!(boxed.to_string(), err.to_string());
    assert_eq!(err.into_issues().len(), 2);
}

#[test]
fn test_parse_error_from_issues() {
    let err = ParseError::from(Issues::single(Issue::custom(Path::root(), "nope")));
    assert_eq!(err.to_string(), "nope");
}
