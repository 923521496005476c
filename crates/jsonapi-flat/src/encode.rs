//! Flat-object to JSON:API document encoder.
//!
//! Walks a flat object (or list of flat objects) and classifies every field
//! by shape into a plain attribute, a to-one/to-many relationship, or a
//! null relationship, producing a `{data, attributes, relationships}`
//! resource split. `type` and `id` stay at the resource root.

use serde_json::{Map, Value};

use crate::error::JsonApiError;
use crate::key::ResourceKey;

/// Encodes a flat payload into a JSON:API document.
///
/// `payload` may be `null`, a single flat object, or a list of flat
/// objects; it is consumed. Members of `additional_params` (e.g. `meta`)
/// are merged into the document root alongside `data`.
///
/// ```
/// use serde_json::json;
///
/// let doc = jsonapi_flat::encode(
///     json!({"id": "1", "type": "articles", "title": "Hi",
///            "author": {"type": "people", "id": "9"}}),
///     None,
/// )
/// .unwrap();
/// assert_eq!(
///     doc,
///     json!({"data": {"id": "1", "type": "articles",
///                     "attributes": {"title": "Hi"},
///                     "relationships": {"author": {"data": {"type": "people", "id": "9"}}}}})
/// );
/// ```
pub fn encode(
    payload: Value,
    additional_params: Option<Map<String, Value>>,
) -> Result<Value, JsonApiError> {
    let data = match payload {
        Value::Null => Value::Null,
        Value::Object(object) => split_resource(object),
        Value::Array(items) => {
            let mut resources = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Object(object) => resources.push(split_resource(object)),
                    _ => return Err(JsonApiError::MissingRequiredArray("data".to_string())),
                }
            }
            Value::Array(resources)
        }
        _ => return Err(JsonApiError::MissingRequiredArray("data".to_string())),
    };
    let mut document = additional_params.unwrap_or_default();
    document.insert("data".to_string(), data);
    Ok(Value::Object(document))
}

// ── Field classification ──────────────────────────────────────────────────

/// True for the `{"type": null}` sentinel marking an emptied to-one
/// relationship.
fn is_null_relationship(object: &Map<String, Value>) -> bool {
    object.len() == 1 && matches!(object.get("type"), Some(Value::Null))
}

/// An object stands as a relationship identifier iff [`ResourceKey`] can be
/// read from it; extra members do not disqualify it, but they are dropped
/// from the emitted `{type, id}` pair.
fn as_identifier(value: &Value) -> Option<ResourceKey> {
    ResourceKey::from_object(value.as_object()?)
}

fn relationship(data: Value) -> Value {
    let mut wrapper = Map::new();
    wrapper.insert("data".to_string(), data);
    Value::Object(wrapper)
}

// ── Splitter ──────────────────────────────────────────────────────────────

/// Splits one flat object into a resource object, consuming it.
///
/// Per field, in classification precedence order: `null` values are
/// dropped; arrays become to-many relationships when empty or when every
/// element is identifier-shaped, attributes otherwise; objects become a
/// null relationship for the `{"type": null}` sentinel, a to-one
/// relationship when identifier-shaped, attributes otherwise; remaining
/// scalars are attributes. Empty `attributes`/`relationships` maps are
/// omitted.
fn split_resource(object: Map<String, Value>) -> Value {
    let mut root = Map::new();
    let mut attributes = Map::new();
    let mut relationships = Map::new();

    for (key, value) in object {
        if key == "type" || key == "id" {
            root.insert(key, value);
            continue;
        }
        match value {
            Value::Null => {}
            Value::Array(items) => {
                match items.iter().map(as_identifier).collect::<Option<Vec<_>>>() {
                    Some(keys) => {
                        let identifiers = keys.iter().map(ResourceKey::to_value).collect();
                        relationships.insert(key, relationship(Value::Array(identifiers)));
                    }
                    None => {
                        attributes.insert(key, Value::Array(items));
                    }
                }
            }
            Value::Object(member) => {
                if is_null_relationship(&member) {
                    relationships.insert(key, relationship(Value::Null));
                } else if let Some(identifier) = ResourceKey::from_object(&member) {
                    relationships.insert(key, relationship(identifier.to_value()));
                } else {
                    attributes.insert(key, Value::Object(member));
                }
            }
            scalar => {
                attributes.insert(key, scalar);
            }
        }
    }

    if !attributes.is_empty() {
        root.insert("attributes".to_string(), Value::Object(attributes));
    }
    if !relationships.is_empty() {
        root.insert("relationships".to_string(), Value::Object(relationships));
    }
    Value::Object(root)
}
