//! Full (unfiltered) relationship resolution.
//!
//! Resolves the whole pool in two passes: attributes for every resource
//! first, then relationships in pool order, one non-recursive substitution
//! per reference. A reference therefore sees its target exactly as resolved
//! as the pass has made it so far: targets visited earlier are fully
//! resolved, targets visited later are attribute-complete with their own
//! relationships still pending. There is no transitive re-resolution, which
//! is also what keeps cyclic reference graphs from recursing.

use serde_json::{Map, Value};

use crate::decode::ResourcePool;
use crate::error::JsonApiError;
use crate::key::ResourceKey;

/// Resolves every pooled resource in place.
pub(crate) fn resolve_pool(pool: &mut ResourcePool) -> Result<(), JsonApiError> {
    for (_, resource) in pool.iter_mut() {
        merge_attributes(resource);
    }
    for index in 0..pool.len() {
        resolve_resource(pool, index)?;
    }
    Ok(())
}

/// Merges a resource's `attributes` map into its root and drops the
/// `attributes` member. A non-object `attributes` member is dropped whole.
fn merge_attributes(resource: &mut Map<String, Value>) {
    if let Some(Value::Object(attributes)) = resource.shift_remove("attributes") {
        for (key, value) in attributes {
            resource.insert(key, value);
        }
    }
}

/// Resolves the relationships of the pool entry at `index`, replacing each
/// relationship key at the resource root with its resolved value and
/// dropping the `relationships` member.
fn resolve_resource(pool: &mut ResourcePool, index: usize) -> Result<(), JsonApiError> {
    let taken = pool
        .get_index_mut(index)
        .and_then(|(_, resource)| resource.shift_remove("relationships"));
    let relationships = match taken {
        Some(Value::Object(relationships)) => relationships,
        // a non-object `relationships` member is left in place untouched
        Some(other) => {
            if let Some((_, resource)) = pool.get_index_mut(index) {
                resource.insert("relationships".to_string(), other);
            }
            return Ok(());
        }
        None => return Ok(()),
    };

    let mut resolved = Vec::with_capacity(relationships.len());
    for (key, value) in relationships {
        let value = resolve_relationship(&key, value, pool)?;
        resolved.push((key, value));
    }
    if let Some((_, resource)) = pool.get_index_mut(index) {
        for (key, value) in resolved {
            resource.insert(key, value);
        }
    }
    Ok(())
}

/// Resolves one relationship value against the pool.
///
/// `data: null` stays `null`; a single identifier resolves singular; an
/// array resolves to a list regardless of how many identifiers resolve,
/// the declared array form being authoritative.
fn resolve_relationship(
    key: &str,
    value: Value,
    pool: &ResourcePool,
) -> Result<Value, JsonApiError> {
    let Value::Object(mut wrapper) = value else {
        return Err(JsonApiError::InvalidRelationshipShape(key.to_string()));
    };
    let Some(data) = wrapper.shift_remove("data") else {
        return Err(JsonApiError::InvalidRelationshipShape(key.to_string()));
    };
    match data {
        Value::Null => Ok(Value::Null),
        Value::Object(identifier) => lookup(identifier, pool),
        Value::Array(identifiers) => {
            let mut resolved = Vec::with_capacity(identifiers.len());
            for identifier in identifiers {
                let Value::Object(identifier) = identifier else {
                    return Err(JsonApiError::MissingTypeOrId);
                };
                resolved.push(lookup(identifier, pool)?);
            }
            Ok(Value::Array(resolved))
        }
        _ => Err(JsonApiError::InvalidRelationshipShape(key.to_string())),
    }
}

/// Pool hit: a snapshot of the entry's current state. Miss: the raw
/// identifier object unchanged.
fn lookup(identifier: Map<String, Value>, pool: &ResourcePool) -> Result<Value, JsonApiError> {
    let key = ResourceKey::require(&identifier)?;
    match pool.get(&key) {
        Some(resource) => Ok(Value::Object(resource.clone())),
        None => Ok(Value::Object(identifier)),
    }
}
