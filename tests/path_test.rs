//! Integration tests for Path.

use assay::{Path, PathKey};
use serde_json::json;

#[test]
fn test_path_construction_and_display() {
    assert_eq!(Path::root().to_string(), "");
    assert_eq!(Path::root().push_name("name").to_string(), "name");
    assert_eq!(Path::root().push_index(0).to_string(), "[0]");

    let path = Path::root()
        .push_name("users")
        .push_index(0)
        .push_name("address")
        .push_name("city");
    assert_eq!(path.to_string(), "users[0].address.city");
}

#[test]
fn test_path_keys_preserved() {
    let path = Path::root().push_name("data").push_index(42).push_name("value");
    let keys: Vec<_> = path.keys().cloned().collect();
    assert_eq!(
        keys,
        vec![
            PathKey::Name("data".to_string()),
            PathKey::Index(42),
            PathKey::Name("value".to_string()),
        ]
    );
}

#[test]
fn test_path_is_immutable() {
    let parent = Path::root().push_name("a");
    let child = parent.child("b");
    assert_eq!(parent.to_string(), "a");
    assert_eq!(child.to_string(), "a.b");
    assert_eq!(child.parent(), Some(parent));
}

#[test]
fn test_path_wire_form() {
    let path = Path::root().push_name("items").push_index(3);
    assert_eq!(path.to_value(), json!(["items", 3]));
    assert_eq!(serde_json::to_value(&path).unwrap(), json!(["items", 3]));
}
