use typesift_core::{CollectionSchema, Field, FieldType, Registry};

use super::reference::validate_reference;
use crate::test_utils::{books, expect_filter_err, expect_filter_ok, registry};
use crate::{Error, Validator};

#[test]
fn join_into_referencing_collection() {
    expect_filter_ok("users", "$posts(author:=1)");
    expect_filter_ok("users", "age:>18 && $posts(likes:>10 && title:Rust)");
    expect_filter_ok("users", "$posts(title:=x) || name:=y");
}

#[test]
fn join_direction_is_checked() {
    insta::assert_snapshot!(
        expect_filter_err("posts", "$users(id:=1)"),
        @"Collection users not referenced in posts"
    );
    insta::assert_snapshot!(
        expect_filter_err("users", "$comments(post:=1)"),
        @"Collection comments not referenced in users"
    );
}

#[test]
fn unregistered_target() {
    insta::assert_snapshot!(
        expect_filter_err("users", "$products(id:=1)"),
        @"Collection products not registered"
    );
}

#[test]
fn unregistered_source() {
    let registry = registry();
    let err = Validator::new(&registry)
        .filter("$posts(id:=1)", &books())
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"Collection books not registered");
}

#[test]
fn nested_joins() {
    expect_filter_ok("users", "$posts(title:=x && $comments(content:=y))");
    expect_filter_ok("users", "$posts($comments(post:1 && content:`An*`))");
}

#[test]
fn inner_error_is_wrapped() {
    insta::assert_snapshot!(
        expect_filter_err("users", "$posts(age:=1)"),
        @"[Error on filter for joined collection posts]: Invalid token sequence: Literal Token age followed by :="
    );
    insta::assert_snapshot!(
        expect_filter_err("users", "$posts(title:[a, b)"),
        @"[Error on filter for joined collection posts]: Square brackets are not balanced"
    );
}

#[test]
fn unbalanced_clause_is_wrapped() {
    let registry = registry();
    let users = registry.get("users").unwrap();
    let err = validate_reference(&Validator::new(&registry), "posts", "(id:=1", users, 0)
        .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"[Error on filter for joined collection posts]: Parentheses are not balanced"
    );
}

#[test]
fn nested_inner_error_is_wrapped_twice() {
    insta::assert_snapshot!(
        expect_filter_err("users", "$posts($users(id:=1))"),
        @"[Error on filter for joined collection posts]: Collection users not referenced in posts"
    );
    insta::assert_snapshot!(
        expect_filter_err("users", "$posts($comments(content:< 1))"),
        @"[Error on filter for joined collection posts]: [Error on filter for joined collection comments]: Invalid token sequence: identifier with name content followed by :<"
    );
}

#[test]
fn wrapped_error_exposes_source_chain() {
    let registry = registry();
    let users = registry.get("users").unwrap();
    let err = Validator::new(&registry)
        .filter("$posts($comments(nope))", users)
        .unwrap_err();

    let mut chain = vec![err.to_string()];
    let mut source = std::error::Error::source(&err);
    while let Some(inner) = source {
        chain.push(inner.to_string());
        source = inner.source();
    }

    assert_eq!(
        chain,
        [
            "[Error on filter for joined collection posts]: [Error on filter for joined collection comments]: Invalid token sequence: literal token cannot be the only token",
            "[Error on filter for joined collection comments]: Invalid token sequence: literal token cannot be the only token",
            "Invalid token sequence: literal token cannot be the only token",
        ]
    );
}

#[test]
fn token_after_join() {
    insta::assert_snapshot!(
        expect_filter_err("users", "$posts(title:=x) age:=1"),
        @"Invalid token sequence: identifier cannot be the next token after a join"
    );
    insta::assert_snapshot!(
        expect_filter_err("users", "$posts(title:=x) :="),
        @"Invalid token sequence: := cannot be the next token after a join"
    );
}

#[test]
fn join_failure_wins_over_later_sequence_error() {
    insta::assert_snapshot!(
        expect_filter_err("users", "age:=1 && $products(id:=1) name"),
        @"Collection products not registered"
    );
}

#[test]
fn unclosed_join_is_unbalanced() {
    insta::assert_snapshot!(
        expect_filter_err("users", "$posts(title:=x"),
        @"Parentheses are not balanced"
    );
}

#[test]
fn empty_join_clause_is_valid() {
    expect_filter_ok("users", "$posts()");
}

#[test]
fn reference_must_target_declared_field() {
    let users = CollectionSchema::new("users", [Field::new("id", FieldType::String)]).unwrap();
    let posts = CollectionSchema::new(
        "posts",
        [Field::new("author", FieldType::String).with_reference("users.missing")],
    )
    .unwrap();
    let registry: Registry = [users, posts].into_iter().collect();

    let err = Validator::new(&registry)
        .filter("$posts(author:=1)", registry.get("users").unwrap())
        .unwrap_err();
    assert_eq!(
        err,
        Error::CollectionNotReferenced {
            collection: "posts".into(),
            referencing: "users".into(),
        }
    );
}
