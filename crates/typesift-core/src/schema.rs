use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::{Field, SchemaError};

/// A validated collection: a name and its fields in declaration order.
///
/// Field names are unique. Referencing fields carry a well-formed
/// `collection.field` target (the target itself is resolved by the [`Registry`](crate::Registry)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSchema {
    name: String,
    fields: IndexMap<String, Field>,
    default_sorting_field: Option<String>,
}

impl CollectionSchema {
    pub fn new(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = Field>,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        let mut by_name = IndexMap::new();

        for field in fields {
            check_field(&name, &field)?;
            match by_name.entry(field.name.clone()) {
                Entry::Occupied(_) => {
                    return Err(SchemaError::DuplicateField {
                        collection: name,
                        field: field.name,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(field);
                }
            }
        }

        Ok(Self {
            name,
            fields: by_name,
            default_sorting_field: None,
        })
    }

    /// The default sorting field must be a required, sortable field.
    pub fn with_default_sorting_field(
        mut self,
        field: impl Into<String>,
    ) -> Result<Self, SchemaError> {
        let field = field.into();
        let valid = self
            .fields
            .get(&field)
            .is_some_and(|f| !f.optional && f.is_sortable());
        if !valid {
            return Err(SchemaError::InvalidDefaultSortingField {
                collection: self.name,
                field,
            });
        }
        self.default_sorting_field = Some(field);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    pub fn default_sorting_field(&self) -> Option<&str> {
        self.default_sorting_field.as_deref()
    }
}

fn check_field(collection: &str, field: &Field) -> Result<(), SchemaError> {
    if !field.is_indexed() && (field.facet || field.sort == Some(true)) {
        return Err(SchemaError::UnindexedCapability {
            collection: collection.to_owned(),
            field: field.name.clone(),
        });
    }

    if let Some(reference) = &field.reference
        && field.reference_target().is_none()
    {
        return Err(SchemaError::InvalidReference {
            field: field.name.clone(),
            reference: reference.clone(),
        });
    }

    Ok(())
}
