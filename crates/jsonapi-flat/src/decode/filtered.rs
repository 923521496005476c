//! Include-tree-bounded relationship resolution.
//!
//! Resolves one resource at a time against an [`IncludeTree`] node,
//! recursing only into relationship keys the node names and only as deep
//! as the tree goes. Every resolution builds a fresh object, so the same
//! pooled resource expanded at two tree positions yields two independent
//! results, each as deep as its own position allows. Tree depth, not the
//! resource graph, bounds the recursion, so cyclic documents are safe.

use jsonapi_flat_include_path::IncludeTree;
use serde_json::{Map, Value};

use crate::decode::ResourcePool;
use crate::error::JsonApiError;
use crate::key::ResourceKey;

/// Resolves one resource against a tree node into a fresh flat object.
///
/// Attributes are copied into the result with `type`/`id` set alongside.
/// For each relationship key the node names: `data: null` becomes a `null`
/// field, identifiers missing from the pool are dropped (a dropped to-one
/// target omits the key entirely), and found resources recurse with the
/// node's child. Relationship keys the node does not name are omitted.
pub(crate) fn resolve(
    resource: &Map<String, Value>,
    pool: &ResourcePool,
    node: &IncludeTree,
) -> Result<Map<String, Value>, JsonApiError> {
    let mut out = Map::new();
    if let Some(Value::Object(attributes)) = resource.get("attributes") {
        for (key, value) in attributes {
            out.insert(key.clone(), value.clone());
        }
    }
    // set after the attribute copy so the resource root always wins
    if let Some(type_) = resource.get("type") {
        out.insert("type".to_string(), type_.clone());
    }
    if let Some(id) = resource.get("id") {
        out.insert("id".to_string(), id.clone());
    }

    let Some(Value::Object(relationships)) = resource.get("relationships") else {
        return Ok(out);
    };
    for (key, child) in node.iter() {
        let Some(value) = relationships.get(key) else {
            continue;
        };
        let Some(data) = value.as_object().and_then(|wrapper| wrapper.get("data")) else {
            return Err(JsonApiError::InvalidRelationshipShape(key.to_string()));
        };
        match data {
            Value::Null => {
                out.insert(key.to_string(), Value::Null);
            }
            Value::Object(identifier) => {
                if let Some(resolved) = resolve_identifier(identifier, pool, child)? {
                    out.insert(key.to_string(), Value::Object(resolved));
                }
            }
            Value::Array(identifiers) => {
                let mut resolved = Vec::with_capacity(identifiers.len());
                for identifier in identifiers {
                    let Value::Object(identifier) = identifier else {
                        return Err(JsonApiError::MissingTypeOrId);
                    };
                    if let Some(object) = resolve_identifier(identifier, pool, child)? {
                        resolved.push(Value::Object(object));
                    }
                }
                out.insert(key.to_string(), Value::Array(resolved));
            }
            _ => return Err(JsonApiError::InvalidRelationshipShape(key.to_string())),
        }
    }
    Ok(out)
}

/// Looks one identifier up in the pool and recurses on a hit; a miss is
/// `None` (dropped).
fn resolve_identifier(
    identifier: &Map<String, Value>,
    pool: &ResourcePool,
    node: &IncludeTree,
) -> Result<Option<Map<String, Value>>, JsonApiError> {
    let key = ResourceKey::require(identifier)?;
    match pool.get(&key) {
        Some(resource) => resolve(resource, pool, node).map(Some),
        None => Ok(None),
    }
}
