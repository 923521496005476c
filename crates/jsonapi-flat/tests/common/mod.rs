//! Shared JSON:API fixture documents for the integration matrices.

use serde_json::{json, Value};

/// One article with a to-one `author` and a to-many `comments`. The author
/// and both comments are carried in `included`; comment `5` references an
/// author (`people/2`) that no part of the document carries.
pub fn article_document() -> Value {
    json!({
        "data": {
            "type": "articles",
            "id": "1",
            "attributes": {"title": "JSON:API paints my bikeshed"},
            "relationships": {
                "author": {"data": {"type": "people", "id": "9"}},
                "comments": {"data": [
                    {"type": "comments", "id": "5"},
                    {"type": "comments", "id": "12"}
                ]}
            }
        },
        "included": [
            {
                "type": "people",
                "id": "9",
                "attributes": {"first-name": "Dan", "last-name": "Gebhardt"}
            },
            {
                "type": "comments",
                "id": "5",
                "attributes": {"body": "First!"},
                "relationships": {"author": {"data": {"type": "people", "id": "2"}}}
            },
            {
                "type": "comments",
                "id": "12",
                "attributes": {"body": "I like XML better"},
                "relationships": {"author": {"data": {"type": "people", "id": "9"}}}
            }
        ],
        "meta": {"copyright": "Example Corp"}
    })
}

/// Two articles whose `author` relationships both reference the single
/// `people/9` resource in `included`.
pub fn shared_author_document() -> Value {
    json!({
        "data": [
            {
                "type": "articles",
                "id": "1",
                "attributes": {"title": "A"},
                "relationships": {"author": {"data": {"type": "people", "id": "9"}}}
            },
            {
                "type": "articles",
                "id": "2",
                "attributes": {"title": "B"},
                "relationships": {"author": {"data": {"type": "people", "id": "9"}}}
            }
        ],
        "included": [
            {"type": "people", "id": "9", "attributes": {"name": "Ana"}}
        ]
    })
}

/// An article and its author referencing each other, forming a cycle.
pub fn cyclic_document() -> Value {
    json!({
        "data": {
            "type": "articles",
            "id": "1",
            "attributes": {"title": "Loop"},
            "relationships": {"author": {"data": {"type": "people", "id": "9"}}}
        },
        "included": [
            {
                "type": "people",
                "id": "9",
                "attributes": {"name": "Ana"},
                "relationships": {"article": {"data": {"type": "articles", "id": "1"}}}
            }
        ]
    })
}
