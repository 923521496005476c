//! Error types shared across encode and decode.

use thiserror::Error;

/// Malformed-input conditions.
///
/// Conversion is pure and synchronous, so every error is terminal for the
/// call: the first violation aborts the whole conversion and no partial
/// document is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonApiError {
    /// A resource or identifier object lacks `type` or `id` where one is
    /// structurally required.
    #[error("resource object is missing `type` or `id`")]
    MissingTypeOrId,

    /// The named member must hold a resource object or an array of resource
    /// objects, but is absent or shaped otherwise.
    #[error("expected `{0}` to hold a resource object or an array of resource objects")]
    MissingRequiredArray(String),

    /// The named relationship is present but is not an object with a `data`
    /// member.
    #[error("relationship `{0}` is not an object with a `data` member")]
    InvalidRelationshipShape(String),
}
