//! JSON:API document decoding.
//!
//! Both decoders share one resource pool keyed by `(type, id)` and built
//! once per call from `data` and `included`. They differ in how
//! relationships are resolved against it: [`decode`] resolves every
//! relationship unconditionally in a single in-order pass, while
//! [`decode_with_includes`] expands only the keys named by an include
//! tree, producing an independent copy per relationship path.

mod filtered;
mod full;

use indexmap::IndexMap;
use jsonapi_flat_include_path::IncludeTree;
use serde_json::{Map, Value};

use crate::coerce::{to_resource_list, CoercedResources};
use crate::error::JsonApiError;
use crate::key::ResourceKey;

/// All resources of one document keyed by identity, in document order:
/// `data` first, then `included`, a duplicate key keeping its first
/// position while the later resource object wins.
pub(crate) type ResourcePool = IndexMap<ResourceKey, Map<String, Value>>;

/// Decodes a JSON:API document into a flat object graph.
///
/// Every relationship of every pooled resource is resolved. The document is
/// consumed and returned with `data` replaced by the flat graph, `included`
/// removed, and all other top-level members passed through verbatim. The
/// object-vs-array shape of `data` is preserved, and `data: null` documents
/// pass through untouched.
pub fn decode(document: Value) -> Result<Value, JsonApiError> {
    let OpenDocument {
        mut rest,
        data,
        included,
    } = open(document)?;
    if data.is_null() {
        rest.insert("data".to_string(), Value::Null);
        return Ok(Value::Object(rest));
    }

    let Primary {
        keys,
        many,
        mut pool,
    } = build_pool(data, included)?;
    full::resolve_pool(&mut pool)?;

    let resolved: Vec<Value> = keys
        .iter()
        .filter_map(|key| pool.get(key))
        .map(|resource| Value::Object(resource.clone()))
        .collect();
    rest.insert("data".to_string(), collapse(resolved, many));
    Ok(Value::Object(rest))
}

/// Decodes a JSON:API document restricted to an include list.
///
/// Only relationship keys named by `include_list` (comma-separated paths of
/// dot-separated segments, e.g. `"author.categories,author.article.author"`)
/// are expanded; unlisted relationship keys are omitted from the result.
/// Expansion depth is bounded by the include paths, so cyclic relationship
/// graphs are safe. Unlike [`decode`], a resource reached via two different
/// paths yields two independently copied results.
pub fn decode_with_includes(document: Value, include_list: &str) -> Result<Value, JsonApiError> {
    let tree = IncludeTree::parse(include_list);
    let OpenDocument {
        mut rest,
        data,
        included,
    } = open(document)?;
    if data.is_null() {
        rest.insert("data".to_string(), Value::Null);
        return Ok(Value::Object(rest));
    }

    let Primary { keys, many, pool } = build_pool(data, included)?;
    let mut resolved = Vec::with_capacity(keys.len());
    for key in &keys {
        if let Some(resource) = pool.get(key) {
            resolved.push(Value::Object(filtered::resolve(resource, &pool, &tree)?));
        }
    }
    rest.insert("data".to_string(), collapse(resolved, many));
    Ok(Value::Object(rest))
}

// ── Shared document plumbing ──────────────────────────────────────────────

#[derive(Debug)]
struct OpenDocument {
    /// Top-level members other than `data`/`included`, passed through.
    rest: Map<String, Value>,
    data: Value,
    included: Option<Value>,
}

/// Splits a document into primary data, included resources, and the
/// passthrough remainder. A document without a `data` member is malformed.
fn open(document: Value) -> Result<OpenDocument, JsonApiError> {
    let Value::Object(mut rest) = document else {
        return Err(JsonApiError::MissingRequiredArray("data".to_string()));
    };
    // shift_remove keeps the passthrough member order stable
    let data = rest
        .shift_remove("data")
        .ok_or_else(|| JsonApiError::MissingRequiredArray("data".to_string()))?;
    let included = rest.shift_remove("included");
    Ok(OpenDocument {
        rest,
        data,
        included,
    })
}

#[derive(Debug)]
struct Primary {
    /// Top-level resource keys in `data` order, driving the rebuild.
    keys: Vec<ResourceKey>,
    /// Whether `data` was declared as an array.
    many: bool,
    pool: ResourcePool,
}

/// Builds the per-call resource pool: `data` seeds it, `included` extends
/// and overwrites it. Every pooled resource must carry `type` and `id`.
fn build_pool(data: Value, included: Option<Value>) -> Result<Primary, JsonApiError> {
    let CoercedResources { resources, many } = to_resource_list(data, "data")?;
    let mut keys = Vec::with_capacity(resources.len());
    let mut pool = ResourcePool::new();
    for resource in resources {
        let key = ResourceKey::require(&resource)?;
        keys.push(key.clone());
        pool.insert(key, resource);
    }
    if let Some(included) = included {
        let CoercedResources { resources, .. } = to_resource_list(included, "included")?;
        for resource in resources {
            let key = ResourceKey::require(&resource)?;
            pool.insert(key, resource);
        }
    }
    Ok(Primary { keys, many, pool })
}

/// Rebuilds `data` from resolved resources: collapse to a single object iff
/// the original shape was a single object and exactly one resource exists.
fn collapse(mut resources: Vec<Value>, many: bool) -> Value {
    if !many && resources.len() == 1 {
        resources.remove(0)
    } else {
        Value::Array(resources)
    }
}
