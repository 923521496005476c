mod common;

use common::{article_document, cyclic_document, shared_author_document};
use jsonapi_flat::{decode_with_includes, JsonApiError};
use serde_json::{json, Value};

#[test]
fn filtered_decode_expands_only_listed_keys() {
    let doc = decode_with_includes(article_document(), "author").unwrap();

    assert_eq!(doc["meta"], json!({"copyright": "Example Corp"}));
    assert_eq!(doc.get("included"), None);

    let article = &doc["data"];
    assert_eq!(
        *article,
        json!({
            "title": "JSON:API paints my bikeshed",
            "type": "articles",
            "id": "1",
            "author": {
                "first-name": "Dan",
                "last-name": "Gebhardt",
                "type": "people",
                "id": "9"
            }
        })
    );
    // `comments` is resolvable from `included`, but was not asked for
    assert_eq!(article.get("comments"), None);
}

#[test]
fn filtered_decode_follows_dot_paths() {
    let doc = decode_with_includes(article_document(), "comments.author").unwrap();
    let comments = doc["data"]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);

    // comment 5 references people/2, which the document does not carry:
    // the unresolvable to-one target drops its key
    assert_eq!(comments[0]["body"], json!("First!"));
    assert_eq!(comments[0].get("author"), None);

    // comment 12's author is carried and expands one level
    assert_eq!(comments[1]["author"]["first-name"], json!("Dan"));

    // the article's own author was not asked for
    assert_eq!(doc["data"].get("author"), None);
}

#[test]
fn filtered_decode_copies_shared_resources_per_path() {
    let doc = decode_with_includes(shared_author_document(), "author").unwrap();
    let mut articles = match doc["data"].clone() {
        Value::Array(articles) => articles,
        other => panic!("expected an array, got {other}"),
    };
    assert_eq!(articles[0]["author"], articles[1]["author"]);

    // the copies are independent: changing one leaves the other alone
    articles[0]["author"]["name"] = json!("Renamed");
    assert_eq!(articles[1]["author"]["name"], json!("Ana"));
    assert_eq!(articles[0]["author"]["id"], json!("9"));
    assert_eq!(articles[1]["author"]["type"], json!("people"));
}

#[test]
fn filtered_decode_is_bounded_on_cyclic_documents() {
    let doc = decode_with_includes(cyclic_document(), "author.article.author").unwrap();
    let author = &doc["data"]["author"];
    assert_eq!(author["name"], json!("Ana"));

    let inner_author = &author["article"]["author"];
    assert_eq!(inner_author["name"], json!("Ana"));
    // the include path ends here; the cycle does not keep expanding
    assert_eq!(inner_author.get("article"), None);
}

#[test]
fn filtered_decode_with_empty_include_list_keeps_attributes_only() {
    let doc = decode_with_includes(article_document(), "").unwrap();
    assert_eq!(
        doc["data"],
        json!({
            "title": "JSON:API paints my bikeshed",
            "type": "articles",
            "id": "1"
        })
    );
}

#[test]
fn filtered_decode_relationship_shapes_matrix() {
    let doc = decode_with_includes(
        json!({
            "data": {
                "type": "articles", "id": "1",
                "relationships": {
                    "author": {"data": null},
                    "tags": {"data": []},
                    "comments": {"data": [
                        {"type": "comments", "id": "5"},
                        {"type": "comments", "id": "404"}
                    ]}
                }
            },
            "included": [{"type": "comments", "id": "5", "attributes": {"body": "ok"}}]
        }),
        "author,tags,comments",
    )
    .unwrap();

    let article = &doc["data"];
    assert_eq!(article["author"], Value::Null);
    assert_eq!(article["tags"], json!([]));
    // unresolvable list elements are dropped, the list form is kept
    assert_eq!(
        article["comments"],
        json!([{"body": "ok", "type": "comments", "id": "5"}])
    );
}

#[test]
fn filtered_decode_preserves_declared_data_shape() {
    let doc = decode_with_includes(
        json!({"data": [{"type": "articles", "id": "1", "attributes": {"title": "A"}}]}),
        "author",
    )
    .unwrap();
    assert_eq!(
        doc["data"],
        json!([{"title": "A", "type": "articles", "id": "1"}])
    );

    let doc = decode_with_includes(json!({"data": null, "meta": {"kept": 1}}), "author").unwrap();
    assert_eq!(doc, json!({"meta": {"kept": 1}, "data": null}));
}

#[test]
fn filtered_decode_error_matrix() {
    assert_eq!(
        decode_with_includes(json!({"meta": {}}), "author").unwrap_err(),
        JsonApiError::MissingRequiredArray("data".into())
    );
    // a listed key with a malformed relationship value fails fast
    assert_eq!(
        decode_with_includes(
            json!({
                "data": {"type": "articles", "id": "1",
                         "relationships": {"author": {"links": {}}}}
            }),
            "author",
        )
        .unwrap_err(),
        JsonApiError::InvalidRelationshipShape("author".into())
    );
    // the same malformed value is ignored when not listed
    let doc = decode_with_includes(
        json!({
            "data": {"type": "articles", "id": "1",
                     "relationships": {"author": {"links": {}}}}
        }),
        "comments",
    )
    .unwrap();
    assert_eq!(doc["data"], json!({"type": "articles", "id": "1"}));
}
