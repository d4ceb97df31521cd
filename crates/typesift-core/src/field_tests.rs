use crate::{Field, FieldType};

#[test]
fn field_type_names_round_trip() {
    for ty in FieldType::ALL {
        assert_eq!(ty.as_str().parse::<FieldType>(), Ok(ty));
        assert_eq!(ty.to_string(), ty.as_str());
    }
}

#[test]
fn unknown_field_type() {
    let err = "uint8".parse::<FieldType>().unwrap_err();
    assert_eq!(err.to_string(), "unknown field type `uint8`");
}

#[test]
fn numeric_fields_sort_by_default() {
    assert!(Field::new("age", FieldType::Int32).is_sortable());
    assert!(Field::new("views", FieldType::Int64).is_sortable());
    assert!(Field::new("price", FieldType::Float).is_sortable());
    assert!(!Field::new("price", FieldType::Float).with_sort(false).is_sortable());
}

#[test]
fn other_fields_sort_only_when_enabled() {
    assert!(!Field::new("name", FieldType::String).is_sortable());
    assert!(Field::new("name", FieldType::String).with_sort(true).is_sortable());
    assert!(!Field::new("scores", FieldType::Int32Array).is_sortable());
}

#[test]
fn indexed_by_default() {
    assert!(Field::new("name", FieldType::String).is_indexed());
    assert!(!Field::new("name", FieldType::String).with_index(false).is_indexed());
}

#[test]
fn reference_target_splits_at_last_dot() {
    let field = Field::new("author", FieldType::String).with_reference("users.id");
    assert_eq!(field.reference_target(), Some(("users", "id")));

    let field = Field::new("author", FieldType::String).with_reference("org.users.id");
    assert_eq!(field.reference_target(), Some(("org.users", "id")));

    for bad in ["users", "users.", ".id"] {
        let field = Field::new("author", FieldType::String).with_reference(bad);
        assert_eq!(field.reference_target(), None, "reference: {bad}");
    }

    assert_eq!(Field::new("id", FieldType::String).reference_target(), None);
}
