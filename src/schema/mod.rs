//! # HAL Envelope Schema Builder
//!
//! Every paginated list endpoint shares one structural contract: the HAL
//! envelope of `_links`, `_embedded` and `_page`. [`hal_schema`] builds the
//! full envelope schema so a test script only supplies the item-level schema
//! for the embedded resources.

use serde_json::{Value, json};

use crate::error::CheckError;
use crate::kind;
use crate::patterns;

/// Schema for a single HAL link object (`href` required, URL-shaped).
fn link() -> Value {
    json!({
        "type": "object",
        "required": ["href"],
        "properties": {
            "href": { "type": "string", "pattern": patterns::url_pattern() }
        }
    })
}

/// Like [`link`], but the whole link may be null (first/last page edges).
fn nullable_link() -> Value {
    json!({ "anyOf": [ link(), { "type": "null" } ] })
}

/// Non-negative integer schema for `_page` counters.
fn page_counter() -> Value {
    json!({ "type": "integer", "minimum": 0 })
}

/// Build the JSON Schema for a paginated HAL envelope.
///
/// `item_schema` describes one embedded resource item; when omitted, any
/// object is accepted. Returns a `Type` error when `item_schema` is present
/// but not object-kind.
pub fn hal_schema(item_schema: Option<&Value>) -> Result<Value, CheckError> {
    if let Some(schema) = item_schema {
        kind::require_object("hal_schema", schema)?;
    }
    let item = item_schema
        .cloned()
        .unwrap_or_else(|| json!({ "type": "object" }));

    Ok(json!({
        "type": "object",
        "required": ["_links", "_embedded", "_page"],
        "properties": {
            "_links": {
                "type": "object",
                "required": ["self", "first", "last", "next", "previous"],
                "properties": {
                    "self": link(),
                    "first": link(),
                    "last": link(),
                    "next": nullable_link(),
                    "previous": nullable_link()
                }
            },
            "_embedded": {
                "type": "object",
                "required": ["resourceList"],
                "properties": {
                    "resourceList": { "type": "array", "items": item }
                }
            },
            "_page": {
                "type": "object",
                "required": ["size", "number"],
                "properties": {
                    "size": page_counter(),
                    "number": page_counter(),
                    "totalElements": page_counter(),
                    "totalPages": page_counter()
                }
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(items: Value) -> Value {
        json!({
            "_links": {
                "self": { "href": "https://api.example.com/things?page=1" },
                "first": { "href": "https://api.example.com/things?page=1" },
                "last": { "href": "https://api.example.com/things?page=3" },
                "next": { "href": "https://api.example.com/things?page=2" },
                "previous": null
            },
            "_embedded": { "resourceList": items },
            "_page": { "size": 20, "number": 0, "totalElements": 42, "totalPages": 3 }
        })
    }

    #[test]
    fn default_item_schema_accepts_any_object() {
        let schema = hal_schema(None).unwrap();
        let validator = jsonschema::validator_for(&schema).unwrap();
        assert!(validator.is_valid(&envelope(json!([{ "anything": true }, {}]))));
    }

    #[test]
    fn item_schema_is_enforced_per_element() {
        let item = json!({ "type": "object", "required": ["id"] });
        let schema = hal_schema(Some(&item)).unwrap();
        let validator = jsonschema::validator_for(&schema).unwrap();

        assert!(validator.is_valid(&envelope(json!([{ "id": 1 }, { "id": 2 }]))));
        assert!(!validator.is_valid(&envelope(json!([{ "id": 1 }, { "name": "x" }]))));
    }

    #[test]
    fn missing_top_level_keys_fail_validation() {
        let schema = hal_schema(None).unwrap();
        let validator = jsonschema::validator_for(&schema).unwrap();

        let mut doc = envelope(json!([]));
        doc.as_object_mut().unwrap().remove("_page");
        assert!(!validator.is_valid(&doc));
    }

    #[test]
    fn link_href_must_be_a_url() {
        let schema = hal_schema(None).unwrap();
        let validator = jsonschema::validator_for(&schema).unwrap();

        let mut doc = envelope(json!([]));
        doc["_links"]["self"]["href"] = json!("not-a-url");
        assert!(!validator.is_valid(&doc));
    }

    #[test]
    fn total_counters_are_optional() {
        let schema = hal_schema(None).unwrap();
        let validator = jsonschema::validator_for(&schema).unwrap();

        let mut doc = envelope(json!([]));
        let page = doc["_page"].as_object_mut().unwrap();
        page.remove("totalElements");
        page.remove("totalPages");
        assert!(validator.is_valid(&doc));
    }

    #[test]
    fn negative_page_number_fails_validation() {
        let schema = hal_schema(None).unwrap();
        let validator = jsonschema::validator_for(&schema).unwrap();

        let mut doc = envelope(json!([]));
        doc["_page"]["number"] = json!(-1);
        assert!(!validator.is_valid(&doc));
    }

    #[test]
    fn non_object_item_schema_is_a_type_error() {
        let err = hal_schema(Some(&json!([1, 2]))).unwrap_err();
        assert!(err.is_type());
        assert_eq!(err.function(), "hal_schema");
    }
}
