//! Test fixtures and assertion helpers.
//!
//! The fixture registry holds `users`, `posts` (references `users.id`) and
//! `comments` (references `posts.id`). `books` exists but is never registered.

use typesift_core::{CollectionSchema, Field, FieldType, Registry};

use crate::Validator;

pub fn users() -> CollectionSchema {
    CollectionSchema::new(
        "users",
        [
            Field::new("id", FieldType::String),
            Field::new("name", FieldType::String).with_sort(true),
            Field::new("email", FieldType::String),
            Field::new("age", FieldType::Int32),
            Field::new("score", FieldType::Float).with_sort(false),
            Field::new("visits", FieldType::Int64),
            Field::new("is_active", FieldType::Bool),
            Field::new("tags", FieldType::StringArray).with_facet(),
            Field::new("ratings", FieldType::Int32Array),
            Field::new("flags", FieldType::BoolArray),
            Field::new("location", FieldType::Geopoint),
            Field::new("bio", FieldType::StringAuto).optional(),
        ],
    )
    .expect("users fixture is valid")
}

pub fn posts() -> CollectionSchema {
    CollectionSchema::new(
        "posts",
        [
            Field::new("id", FieldType::String),
            Field::new("title", FieldType::String),
            Field::new("author", FieldType::String).with_reference("users.id"),
            Field::new("likes", FieldType::Int32),
        ],
    )
    .expect("posts fixture is valid")
}

pub fn comments() -> CollectionSchema {
    CollectionSchema::new(
        "comments",
        [
            Field::new("id", FieldType::String),
            Field::new("post", FieldType::String).with_reference("posts.id"),
            Field::new("content", FieldType::String),
        ],
    )
    .expect("comments fixture is valid")
}

pub fn books() -> CollectionSchema {
    CollectionSchema::new(
        "books",
        [
            Field::new("title", FieldType::String),
            Field::new("pages", FieldType::Int32),
        ],
    )
    .expect("books fixture is valid")
}

pub fn registry() -> Registry {
    [users(), posts(), comments()].into_iter().collect()
}

fn collection<'r>(registry: &'r Registry, name: &str) -> &'r CollectionSchema {
    registry
        .get(name)
        .unwrap_or_else(|| panic!("fixture collection `{name}` is registered"))
}

#[track_caller]
pub fn expect_filter_ok(collection_name: &str, input: &str) {
    let registry = registry();
    let schema = collection(&registry, collection_name);
    if let Err(err) = Validator::new(&registry).filter(input, schema) {
        panic!("expected `{input}` to be a valid filter on {collection_name}, got: {err}");
    }
}

#[track_caller]
pub fn expect_filter_err(collection_name: &str, input: &str) -> String {
    let registry = registry();
    let schema = collection(&registry, collection_name);
    match Validator::new(&registry).filter(input, schema) {
        Ok(()) => panic!("expected `{input}` to be rejected as a filter on {collection_name}"),
        Err(err) => err.to_string(),
    }
}

#[track_caller]
pub fn expect_sort_ok(collection_name: &str, input: &str) {
    let registry = registry();
    let schema = collection(&registry, collection_name);
    if let Err(err) = Validator::new(&registry).sort(input, schema) {
        panic!("expected `{input}` to be a valid sort on {collection_name}, got: {err}");
    }
}

#[track_caller]
pub fn expect_sort_err(collection_name: &str, input: &str) -> String {
    let registry = registry();
    let schema = collection(&registry, collection_name);
    match Validator::new(&registry).sort(input, schema) {
        Ok(()) => panic!("expected `{input}` to be rejected as a sort on {collection_name}"),
        Err(err) => err.to_string(),
    }
}
