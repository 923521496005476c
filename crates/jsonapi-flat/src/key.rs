//! Compound `(type, id)` resource identity.

use serde_json::{Map, Value};

use crate::error::JsonApiError;

/// Value-type compound key identifying one resource within a document.
///
/// Two keys are equal iff both members match; the derived hash makes the
/// key usable directly as a map key, with no string-concatenation tricks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey {
    pub type_: String,
    pub id: String,
}

impl ResourceKey {
    /// Reads `type`/`id` from a resource-like object.
    ///
    /// Returns `None` unless both members are present as strings.
    pub fn from_object(object: &Map<String, Value>) -> Option<ResourceKey> {
        let type_ = object.get("type")?.as_str()?;
        let id = object.get("id")?.as_str()?;
        Some(ResourceKey {
            type_: type_.to_string(),
            id: id.to_string(),
        })
    }

    /// Like [`ResourceKey::from_object`], but a missing member is an error.
    pub fn require(object: &Map<String, Value>) -> Result<ResourceKey, JsonApiError> {
        Self::from_object(object).ok_or(JsonApiError::MissingTypeOrId)
    }

    /// Renders the key back into a `{type, id}` identifier object.
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        object.insert("type".to_string(), Value::String(self.type_.clone()));
        object.insert("id".to_string(), Value::String(self.id.clone()));
        Value::Object(object)
    }
}
