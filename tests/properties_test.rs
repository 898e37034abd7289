//! Behavioural guarantees that hold across schema kinds.

use assay::{action, parse, Schema, SchemaRef, SchemaLike};
use serde_json::{json, Value};

fn schemas() -> Vec<SchemaRef> {
    vec![
        Schema::string().into_ref(),
        Schema::integer().into_ref(),
        Schema::null().into_ref(),
        Schema::enumeration(["a", "b"]).into_ref(),
        Schema::array(Schema::optional(Schema::number())).into_ref(),
        Schema::tuple(vec![Schema::boolean().into_ref()]).into_ref(),
        Schema::object()
            .field("a", Schema::string())
            .optional("b", Schema::number())
            .into_ref(),
        Schema::strict_object().field("a", Schema::string()).into_ref(),
        Schema::record(Schema::boolean()).into_ref(),
        Schema::union(vec![Schema::string().into_ref(), Schema::number().into_ref()]).into_ref(),
        Schema::pipe(Schema::string(), vec![action::trim(), action::to_lower_case()]).into_ref(),
    ]
}

fn inputs() -> Vec<Value> {
    vec![
        json!(null),
        json!(true),
        json!(0),
        json!(-2.5),
        json!(""),
        json!("  A "),
        json!("a"),
        json!([]),
        json!([1, null, "x"]),
        json!([false]),
        json!({}),
        json!({"a": "x"}),
        json!({"a": "x", "b": 1, "c": true}),
        json!({"k": true}),
    ]
}

#[test]
fn test_exactly_one_outcome() {
    for schema in schemas() {
        for value in inputs() {
            let result = parse(&schema, &value);
            assert_ne!(result.is_success(), result.is_failure());
        }
    }
}

#[test]
fn test_failures_carry_issues_with_messages() {
    for schema in schemas() {
        for value in inputs() {
            if let Err(issues) = parse(&schema, &value).into_result() {
                assert!(issues.len() >= 1);
                assert!(issues.iter().all(|i| !i.message.is_empty()));
            }
        }
    }
}

#[test]
fn test_idempotent_on_success() {
    for schema in schemas() {
        for value in inputs() {
            if let Ok(once) = parse(&schema, &value).into_result() {
                let twice = parse(&schema, &once).into_result().unwrap();
                assert_eq!(once, twice, "schema {} on {}", schema.kind(), value);
            }
        }
    }
}

#[test]
fn test_parse_does_not_modify_input() {
    let schema =
        Schema::object().field("name", Schema::pipe(Schema::string(), vec![action::trim()]));
    let input = json!({"name": "  x  ", "extra": 1});
    let before = input.clone();

    let _ = parse(&schema, &input);
    assert_eq!(input, before);
}
