//! jsonapi-flat: bidirectional conversion between flat, nested JSON object
//! graphs and JSON:API documents.
//!
//! Application code works with plain nested objects; the wire speaks
//! JSON:API. [`encode`] splits a flat object (or list of flat objects)
//! into `type`/`id`/`attributes`/`relationships` resources by per-field
//! shape classification. [`decode`] resolves a whole document back into a
//! flat graph against a `(type, id)` resource pool built from `data` and
//! `included`; [`decode_with_includes`] does the same but expands only the
//! relationship paths named by an include list, which also bounds cyclic
//! documents.
//!
//! All operations are pure, synchronous transformations over caller-owned
//! [`serde_json::Value`] trees: no I/O, no schema validation beyond minimal
//! shape checks, and top-level members such as `meta` or `links` pass
//! through both directions verbatim.

mod coerce;
pub mod decode;
pub mod encode;
pub mod error;
pub mod key;

pub use decode::{decode, decode_with_includes};
pub use encode::encode;
pub use error::JsonApiError;
pub use jsonapi_flat_include_path::IncludeTree;
pub use key::ResourceKey;
