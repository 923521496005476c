//! Single-object vs array normalization for `data` members.

use serde_json::{Map, Value};

use crate::error::JsonApiError;

/// A `data` member normalized to a uniform list of resource objects.
///
/// The declared JSON shape is retained in `many` so that the inverse
/// collapse (single object vs list) is driven by the shape the document
/// spelled out, never by the element count.
#[derive(Debug)]
pub(crate) struct CoercedResources {
    pub resources: Vec<Map<String, Value>>,
    /// Whether the member was declared as an array at the JSON level.
    pub many: bool,
}

/// Normalizes a `data`-like value into a list of resource objects.
///
/// A single object becomes a singleton list; an array is taken element by
/// element. Any other shape, including arrays with non-object elements, is
/// a [`JsonApiError::MissingRequiredArray`] for `member`. Absent and `null`
/// values are tri-state significant to callers and are handled at the call
/// sites, never here.
pub(crate) fn to_resource_list(
    value: Value,
    member: &str,
) -> Result<CoercedResources, JsonApiError> {
    match value {
        Value::Object(object) => Ok(CoercedResources {
            resources: vec![object],
            many: false,
        }),
        Value::Array(items) => {
            let mut resources = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Object(object) => resources.push(object),
                    _ => return Err(JsonApiError::MissingRequiredArray(member.to_string())),
                }
            }
            Ok(CoercedResources {
                resources,
                many: true,
            })
        }
        _ => Err(JsonApiError::MissingRequiredArray(member.to_string())),
    }
}
