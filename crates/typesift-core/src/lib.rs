#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Collection schema model consumed by the typesift expression validators.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to Typesense collection JSON
//! - **Model layer**: validated [`CollectionSchema`] values and the [`Registry`]
//!   of all collections with its derived reverse-reference index
//!
//! The validators only ever borrow these types read-only.

mod field;
mod json;
mod registry;
mod schema;

#[cfg(test)]
mod field_tests;
#[cfg(test)]
mod schema_tests;

pub use field::{Field, FieldType, ParseFieldTypeError};
pub use json::parse_collections;
pub use registry::Registry;
pub use schema::CollectionSchema;

/// Errors raised while building or loading a collection schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate field `{field}` in collection `{collection}`")]
    DuplicateField { collection: String, field: String },

    #[error("field `{field}` in collection `{collection}` cannot be faceted or sorted when not indexed")]
    UnindexedCapability { collection: String, field: String },

    #[error("field `{field}` has invalid reference `{reference}` (expected `collection.field`)")]
    InvalidReference { field: String, reference: String },

    #[error("field `{field}` cannot be the default sorting field of collection `{collection}`")]
    InvalidDefaultSortingField { collection: String, field: String },

    #[error("object field `{field}` requires `enable_nested_fields` on collection `{collection}`")]
    NestedFieldsDisabled { collection: String, field: String },
}
