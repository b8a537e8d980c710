use super::{reference, FieldDescriptor};

use serde::{Deserialize, Serialize};

/// A named entity and its ordered fields.
///
/// The name is used verbatim as the table name and as the model artifact
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDescriptor {
    pub name: String,

    pub fields: Vec<FieldDescriptor>,
}

impl EntityDescriptor {
    /// Name of the creation timestamp column added to every entity.
    pub const CREATED_AT: &'static str = "created_at";

    /// Name of the update timestamp column added to every entity.
    pub const UPDATED_AT: &'static str = "updated_at";

    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> EntityDescriptor {
        EntityDescriptor {
            name: name.into(),
            fields,
        }
    }

    /// Name of the implicit primary key column, `<name>_id`.
    pub fn primary_key(&self) -> String {
        reference::default_column(&self.name)
    }

    /// Names of the columns generated for every entity regardless of its
    /// fields, in table order.
    pub fn implicit_columns(&self) -> [String; 3] {
        [
            self.primary_key(),
            Self::CREATED_AT.to_string(),
            Self::UPDATED_AT.to_string(),
        ]
    }

    /// Parses a descriptor from its JSON representation.
    pub fn from_json(json: &str) -> crate::Result<EntityDescriptor> {
        serde_json::from_str(json).map_err(|err| {
            crate::Error::from(anyhow::Error::from(err))
                .context(crate::Error::invalid_descriptor("malformed JSON"))
        })
    }
}
