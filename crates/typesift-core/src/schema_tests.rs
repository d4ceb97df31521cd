use crate::{CollectionSchema, Field, FieldType, SchemaError};

#[test]
fn fields_keep_declaration_order() {
    let schema = CollectionSchema::new(
        "users",
        [
            Field::new("name", FieldType::String),
            Field::new("age", FieldType::Int32),
            Field::new("email", FieldType::String),
        ],
    )
    .unwrap();

    let names: Vec<_> = schema.fields().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["name", "age", "email"]);
    assert_eq!(schema.name(), "users");
    assert_eq!(schema.field("age").map(|f| f.field_type), Some(FieldType::Int32));
    assert!(!schema.has_field("missing"));
}

#[test]
fn duplicate_field() {
    let err = CollectionSchema::new(
        "users",
        [
            Field::new("name", FieldType::String),
            Field::new("name", FieldType::Int32),
        ],
    )
    .unwrap_err();

    assert!(matches!(err, SchemaError::DuplicateField { .. }));
    assert_eq!(err.to_string(), "duplicate field `name` in collection `users`");
}

#[test]
fn unindexed_field_cannot_facet_or_sort() {
    for field in [
        Field::new("tag", FieldType::String).with_index(false).with_facet(),
        Field::new("tag", FieldType::String).with_index(false).with_sort(true),
    ] {
        let err = CollectionSchema::new("posts", [field]).unwrap_err();
        assert!(matches!(err, SchemaError::UnindexedCapability { .. }));
    }

    let plain = Field::new("tag", FieldType::String).with_index(false);
    assert!(CollectionSchema::new("posts", [plain]).is_ok());
}

#[test]
fn malformed_reference() {
    let field = Field::new("author", FieldType::String).with_reference("users");
    let err = CollectionSchema::new("posts", [field]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "field `author` has invalid reference `users` (expected `collection.field`)"
    );
}

#[test]
fn default_sorting_field_must_be_required_and_sortable() {
    let fields = || {
        [
            Field::new("name", FieldType::String),
            Field::new("age", FieldType::Int32),
            Field::new("rank", FieldType::Int32).optional(),
        ]
    };

    let schema = CollectionSchema::new("users", fields())
        .unwrap()
        .with_default_sorting_field("age")
        .unwrap();
    assert_eq!(schema.default_sorting_field(), Some("age"));

    for field in ["name", "rank", "missing"] {
        let err = CollectionSchema::new("users", fields())
            .unwrap()
            .with_default_sorting_field(field)
            .unwrap_err();
        assert!(
            matches!(err, SchemaError::InvalidDefaultSortingField { .. }),
            "field: {field}"
        );
    }
}
