//! Tests for typed output through parse_into and the marker wrappers.

use assay::{action, is, parse, parse_into, Brand, Flavor, IssueKind, Readonly, Schema};
use serde::Deserialize;
use serde_json::json;

struct Email;

#[derive(Debug, Deserialize)]
struct Signup {
    email: Brand<String, Email>,
    nickname: Option<String>,
    tags: Readonly<Vec<String>>,
}

fn signup_schema() -> assay::ObjectSchema {
    Schema::object()
        .field(
            "email",
            Schema::pipe(
                Schema::string(),
                vec![action::trim(), action::pattern("@").unwrap(), action::brand::<Email>()],
            ),
        )
        .optional("nickname", Schema::string())
        .field("tags", Schema::pipe(Schema::array(Schema::string()), vec![action::readonly()]))
}

#[test]
fn test_parse_into_struct() {
    let signup: Signup = parse_into(
        &signup_schema(),
        &json!({"email": " a@b.c ", "tags": ["x"]}),
    )
    .into_result()
    .unwrap();

    assert_eq!(&*signup.email, "a@b.c");
    assert_eq!(signup.nickname, None);
    assert_eq!(signup.tags.len(), 1);
}

#[test]
fn test_parse_into_reports_validation_issues() {
    let issues = parse_into::<Signup, _>(&signup_schema(), &json!({"email": "nope", "tags": [1]}))
        .into_result()
        .unwrap_err();

    let paths: Vec<_> = issues.iter().map(|i| i.path.to_string()).collect();
    assert_eq!(paths, vec!["email", "tags[0]"]);
}

#[test]
fn test_flavor_accepts_plain_values() {
    struct Cents;
    let price: Flavor<u64, Cents> = 250.into();
    assert_eq!(*price, 250);

    let parsed: Flavor<u64, Cents> = parse_into(
        &Schema::pipe(Schema::integer(), vec![action::flavor::<Cents>()]),
        &json!(99),
    )
    .into_result()
    .unwrap();
    assert_eq!(parsed.into_inner(), 99);
}

#[test]
fn test_deserialize_mismatch_becomes_custom_issue() {
    let result = parse_into::<Vec<u8>, _>(&Schema::array(Schema::integer()), &json!([1, 300]));
    let issues = result.into_result().unwrap_err();
    assert_eq!(issues.first().code, IssueKind::Custom);
}

#[test]
fn test_is_agrees_with_parse() {
    let schema = signup_schema();
    for value in [
        json!({"email": "a@b", "tags": []}),
        json!({"email": "ab", "tags": []}),
        json!(null),
    ] {
        assert_eq!(is(&schema, &value), parse(&schema, &value).is_success());
    }
}
