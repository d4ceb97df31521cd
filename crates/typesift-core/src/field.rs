use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Declared type of a collection field.
///
/// The serialized names are the ones Typesense uses in collection JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "int32")]
    Int32,
    #[serde(rename = "int64")]
    Int64,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "geopoint")]
    Geopoint,
    #[serde(rename = "geopoint[]")]
    GeopointArray,
    #[serde(rename = "string[]")]
    StringArray,
    #[serde(rename = "int32[]")]
    Int32Array,
    #[serde(rename = "int64[]")]
    Int64Array,
    #[serde(rename = "float[]")]
    FloatArray,
    #[serde(rename = "bool[]")]
    BoolArray,
    #[serde(rename = "object")]
    Object,
    #[serde(rename = "object[]")]
    ObjectArray,
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "string*")]
    StringAuto,
    #[serde(rename = "image")]
    Image,
}

impl FieldType {
    pub const ALL: [FieldType; 17] = [
        FieldType::String,
        FieldType::Int32,
        FieldType::Int64,
        FieldType::Float,
        FieldType::Bool,
        FieldType::Geopoint,
        FieldType::GeopointArray,
        FieldType::StringArray,
        FieldType::Int32Array,
        FieldType::Int64Array,
        FieldType::FloatArray,
        FieldType::BoolArray,
        FieldType::Object,
        FieldType::ObjectArray,
        FieldType::Auto,
        FieldType::StringAuto,
        FieldType::Image,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int32 => "int32",
            FieldType::Int64 => "int64",
            FieldType::Float => "float",
            FieldType::Bool => "bool",
            FieldType::Geopoint => "geopoint",
            FieldType::GeopointArray => "geopoint[]",
            FieldType::StringArray => "string[]",
            FieldType::Int32Array => "int32[]",
            FieldType::Int64Array => "int64[]",
            FieldType::FloatArray => "float[]",
            FieldType::BoolArray => "bool[]",
            FieldType::Object => "object",
            FieldType::ObjectArray => "object[]",
            FieldType::Auto => "auto",
            FieldType::StringAuto => "string*",
            FieldType::Image => "image",
        }
    }

    /// Scalar numeric types. These are sortable unless sorting is disabled.
    pub fn is_numeric(self) -> bool {
        matches!(self, FieldType::Int32 | FieldType::Int64 | FieldType::Float)
    }

    pub fn is_object(self) -> bool {
        matches!(self, FieldType::Object | FieldType::ObjectArray)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field type `{0}`")]
pub struct ParseFieldTypeError(pub String);

impl FromStr for FieldType {
    type Err = ParseFieldTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| ParseFieldTypeError(s.to_owned()))
    }
}

/// One field declaration of a collection.
///
/// Optional capabilities stay `None` when the JSON omits them so the
/// Typesense defaults (indexed, type-dependent sorting) can be applied lazily.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<bool>,
    #[serde(default)]
    pub facet: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<bool>,
    #[serde(default)]
    pub infix: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            optional: false,
            index: None,
            facet: false,
            sort: None,
            infix: false,
            reference: None,
        }
    }

    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_facet(mut self) -> Self {
        self.facet = true;
        self
    }

    pub fn with_index(mut self, index: bool) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn is_indexed(&self) -> bool {
        self.index.unwrap_or(true)
    }

    /// Explicit `sort: true`, or a numeric type without `sort: false`.
    pub fn is_sortable(&self) -> bool {
        match self.sort {
            Some(sort) => sort,
            None => self.field_type.is_numeric(),
        }
    }

    /// Splits `reference` into `(collection, field)` at the last dot.
    pub fn reference_target(&self) -> Option<(&str, &str)> {
        let reference = self.reference.as_deref()?;
        let (collection, field) = reference.rsplit_once('.')?;
        if collection.is_empty() || field.is_empty() {
            return None;
        }
        Some((collection, field))
    }
}
