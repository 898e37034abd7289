//! Structural rewrites of schema trees.
//!
//! [`deep_partial`] makes every object field optional at every depth, and
//! [`deep_required`] undoes one level of optionality on every field. Both read
//! a schema's children through [`SchemaLike::structure`], so custom schemas
//! that report [`Structure::Opaque`] are left alone.

use std::sync::Arc;

use super::array::ArraySchema;
use super::combinators::OptionalSchema;
use super::object::ObjectSchema;
use super::traits::{SchemaKind, SchemaLike, SchemaRef, Shape, Structure};

/// Makes every object field optional, recursively.
///
/// Object-like schemas become loose objects whose fields are the partial form
/// of the original fields, each made optional. Arrays and optionals are
/// rebuilt around their partial children, so an optional object is still
/// optional and its fields become optional too. Anything else is returned as
/// is.
///
/// # Example
///
/// ```rust
/// use assay::{deep_partial, parse, Schema, SchemaLike};
/// use serde_json::json;
///
/// let user = Schema::object()
///     .field("name", Schema::string())
///     .field("address", Schema::object().field("city", Schema::string()))
///     .into_ref();
///
/// let patch = deep_partial(&user);
/// assert!(parse(&patch, &json!({})).is_success());
/// assert!(parse(&patch, &json!({"address": {}})).is_success());
/// assert!(parse(&patch, &json!({"address": {"city": 5}})).is_failure());
/// ```
pub fn deep_partial(schema: &SchemaRef) -> SchemaRef {
    match schema.structure() {
        Structure::Shape(shape) => {
            let fields: Shape = shape
                .iter()
                .map(|(name, field)| (name.clone(), make_optional(deep_partial(field))))
                .collect();
            Arc::new(ObjectSchema::from_shape(fields))
        }
        Structure::Item(item) => Arc::new(ArraySchema::from_ref(deep_partial(item))),
        Structure::Inner(inner) => Arc::new(OptionalSchema::from_ref(deep_partial(inner))),
        Structure::Opaque => Arc::clone(schema),
    }
}

/// Strips one level of optionality from every object field, recursively.
///
/// # Example
///
/// ```rust
/// use assay::{deep_required, parse, Schema, SchemaLike};
/// use serde_json::json;
///
/// let draft = Schema::object()
///     .optional("title", Schema::string())
///     .optional("meta", Schema::object().optional("tags", Schema::array(Schema::string())))
///     .into_ref();
///
/// let published = deep_required(&draft);
/// assert!(parse(&published, &json!({"title": "x", "meta": {"tags": []}})).is_success());
/// assert!(parse(&published, &json!({"title": "x", "meta": {}})).is_failure());
/// ```
pub fn deep_required(schema: &SchemaRef) -> SchemaRef {
    match schema.structure() {
        Structure::Shape(shape) => {
            let fields: Shape = shape
                .iter()
                .map(|(name, field)| (name.clone(), strip_optional(deep_required(field))))
                .collect();
            Arc::new(ObjectSchema::from_shape(fields))
        }
        Structure::Item(item) => Arc::new(ArraySchema::from_ref(deep_required(item))),
        Structure::Inner(inner) => Arc::new(OptionalSchema::from_ref(deep_required(inner))),
        Structure::Opaque => Arc::clone(schema),
    }
}

fn make_optional(schema: SchemaRef) -> SchemaRef {
    if schema.kind() == SchemaKind::Optional {
        schema
    } else {
        Arc::new(OptionalSchema::from_ref(schema))
    }
}

fn strip_optional(schema: SchemaRef) -> SchemaRef {
    match schema.structure() {
        Structure::Inner(inner) => Arc::clone(inner),
        _ => schema,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::result::ParseResultExt;
    use crate::schema::Schema;
    use serde_json::json;

    fn field_kinds(schema: &SchemaRef) -> Vec<(String, SchemaKind)> {
        match schema.structure() {
            Structure::Shape(shape) => shape.iter().map(|(k, v)| (k.clone(), v.kind())).collect(),
            _ => panic!("expected a shape"),
        }
    }

    #[test]
    fn test_partial_wraps_each_field_once() {
        let schema = Schema::object()
            .field("a", Schema::string())
            .optional("b", Schema::string())
            .into_ref();

        let partial = deep_partial(&schema);
        assert_eq!(
            field_kinds(&partial),
            vec![
                ("a".to_string(), SchemaKind::Optional),
                ("b".to_string(), SchemaKind::Optional),
            ]
        );

        match partial.structure() {
            Structure::Shape(shape) => match shape["b"].structure() {
                Structure::Inner(inner) => assert_eq!(inner.kind(), SchemaKind::String),
                _ => panic!("expected an optional"),
            },
            _ => panic!("expected a shape"),
        }
    }

    #[test]
    fn test_partial_recurses_through_arrays() {
        let schema = Schema::array(Schema::object().field("id", Schema::number())).into_ref();
        let partial = deep_partial(&schema);

        let out = partial
            .validate(&json!([{}, {"id": 2}]), &mut Context::root())
            .unwrap_value();
        assert_eq!(out, json!([{}, {"id": 2}]));
    }

    #[test]
    fn test_partial_recurses_through_optionals() {
        let schema = Schema::optional(Schema::object().field("id", Schema::number())).into_ref();
        let partial = deep_partial(&schema);
        assert_eq!(partial.kind(), SchemaKind::Optional);

        let mut ctx = Context::root();
        assert_eq!(partial.validate(&json!({}), &mut ctx).unwrap_value(), json!({}));
        assert_eq!(partial.validate(&json!(null), &mut ctx).unwrap_value(), json!(null));
    }

    #[test]
    fn test_partial_leaves_opaque_untouched() {
        let leaf = Schema::string().into_ref();
        assert!(Arc::ptr_eq(&deep_partial(&leaf), &leaf));
        assert!(Arc::ptr_eq(&deep_required(&leaf), &leaf));
    }

    #[test]
    fn test_partial_loosens_strict_objects() {
        let schema = Schema::object().field("a", Schema::string()).strict().into_ref();
        let partial = deep_partial(&schema);
        assert_eq!(partial.kind(), SchemaKind::Object);
        assert!(partial
            .validate(&json!({"extra": 1}), &mut Context::root())
            .is_success());
    }

    #[test]
    fn test_required_strips_one_level() {
        let schema = Schema::object()
            .field("a", Schema::optional(Schema::optional(Schema::string())))
            .into_ref();
        assert_eq!(
            field_kinds(&deep_required(&schema)),
            vec![("a".to_string(), SchemaKind::Optional)]
        );
    }

    #[test]
    fn test_required_after_partial_restores_requiredness() {
        let schema = Schema::object()
            .field("a", Schema::string())
            .field("b", Schema::object().field("c", Schema::number()))
            .into_ref();
        let restored = deep_required(&deep_partial(&schema));

        let issues = restored
            .validate(&json!({"b": {}}), &mut Context::root())
            .unwrap_issues();
        let paths: Vec<_> = issues.iter().map(|i| i.path.to_string()).collect();
        assert_eq!(paths, vec!["a", "b.c"]);
    }
}
