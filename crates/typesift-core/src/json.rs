//! JSON deserialization for Typesense collection schemas.
//!
//! A document holds either one collection object or an array of them.

use serde::Deserialize;

use crate::{CollectionSchema, Field, SchemaError};

/// Parse one or more collections from a JSON document.
pub fn parse_collections(json: &str) -> Result<Vec<CollectionSchema>, SchemaError> {
    let raw: RawDocument = serde_json::from_str(json)?;
    let collections = match raw {
        RawDocument::One(collection) => vec![collection],
        RawDocument::Many(collections) => collections,
    };
    collections.into_iter().map(RawCollection::into_schema).collect()
}

impl CollectionSchema {
    /// Parse a single collection from JSON.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let raw: RawCollection = serde_json::from_str(json)?;
        raw.into_schema()
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDocument {
    One(RawCollection),
    Many(Vec<RawCollection>),
}

/// Raw collection structure matching the Typesense create-collection body.
#[derive(Debug, Deserialize)]
struct RawCollection {
    name: String,
    fields: Vec<Field>,
    #[serde(default)]
    default_sorting_field: Option<String>,
    #[serde(default)]
    enable_nested_fields: bool,
}

impl RawCollection {
    fn into_schema(self) -> Result<CollectionSchema, SchemaError> {
        if !self.enable_nested_fields
            && let Some(object) = self.fields.iter().find(|f| f.field_type.is_object())
        {
            return Err(SchemaError::NestedFieldsDisabled {
                collection: self.name,
                field: object.name.clone(),
            });
        }

        let schema = CollectionSchema::new(self.name, self.fields)?;
        match self.default_sorting_field {
            Some(field) if !field.is_empty() => schema.with_default_sorting_field(field),
            _ => Ok(schema),
        }
    }
}
