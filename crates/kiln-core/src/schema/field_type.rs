use super::{db, model};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Abstract type a caller declares for a field.
///
/// Type names are matched case-sensitively. Any name outside the known set
/// is kept as [`FieldType::Other`] and degrades to the generic text type on
/// both targets instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    String,
    Number,
    Float,
    Boolean,
    Date,
    #[default]
    Text,
    Uuid,
    Json,
    Array,
    Other(String),
}

impl FieldType {
    /// Maps the abstract type to its DDL column type.
    pub fn sql_type(&self) -> db::Type {
        match self {
            FieldType::String => db::Type::STRING,
            FieldType::Number => db::Type::Integer,
            FieldType::Float => db::Type::Float,
            FieldType::Boolean => db::Type::Boolean,
            FieldType::Date => db::Type::Timestamp,
            FieldType::Text => db::Type::Text,
            FieldType::Uuid => db::Type::Uuid,
            FieldType::Json => db::Type::Json,
            // Arrays have no standalone column type
            FieldType::Array => db::Type::Text,
            FieldType::Other(_) => db::Type::Text,
        }
    }

    /// Maps the abstract type to its model-layer type.
    pub fn model_type(&self) -> model::Type {
        match self {
            FieldType::String => model::Type::String,
            FieldType::Number => model::Type::Integer,
            FieldType::Float => model::Type::Float,
            FieldType::Boolean => model::Type::Boolean,
            FieldType::Date => model::Type::Date,
            FieldType::Text => model::Type::Text,
            FieldType::Uuid => model::Type::Uuid,
            FieldType::Json => model::Type::Json,
            FieldType::Array => model::Type::array(model::Type::Text),
            FieldType::Other(_) => model::Type::Text,
        }
    }

    /// Returns the name the type was declared with.
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::String => "String",
            FieldType::Number => "Number",
            FieldType::Float => "Float",
            FieldType::Boolean => "Boolean",
            FieldType::Date => "Date",
            FieldType::Text => "Text",
            FieldType::Uuid => "UUID",
            FieldType::Json => "JSON",
            FieldType::Array => "Array",
            FieldType::Other(name) => name,
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, FieldType::Other(_))
    }
}

impl From<&str> for FieldType {
    fn from(value: &str) -> Self {
        match value {
            "String" => FieldType::String,
            "Number" => FieldType::Number,
            "Float" => FieldType::Float,
            "Boolean" => FieldType::Boolean,
            "Date" => FieldType::Date,
            "Text" => FieldType::Text,
            "UUID" => FieldType::Uuid,
            "JSON" => FieldType::Json,
            "Array" => FieldType::Array,
            other => FieldType::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldType {
    fn from(value: String) -> Self {
        FieldType::from(&value[..])
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> Self {
        match value {
            FieldType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
