use super::{FieldType, Reference};

use serde::{Deserialize, Serialize};

/// One typed field of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name, also used verbatim as the column name.
    pub name: String,

    /// Declared abstract type. A missing type reads as `Text`.
    #[serde(rename = "type", default)]
    pub ty: FieldType,

    /// When true, both artifacts forbid null values.
    #[serde(default)]
    pub required: bool,

    /// Name of the entity this field references.
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Name of the referenced column. Defaults to `<ref>_id`.
    #[serde(rename = "refColumn", default, skip_serializing_if = "Option::is_none")]
    pub ref_column: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: impl Into<FieldType>) -> FieldDescriptor {
        FieldDescriptor {
            name: name.into(),
            ty: ty.into(),
            required: false,
            reference: None,
            ref_column: None,
        }
    }

    /// Marks the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Makes the field reference `entity`.
    pub fn references(mut self, entity: impl Into<String>) -> Self {
        self.reference = Some(entity.into());
        self
    }

    /// Overrides the referenced column.
    pub fn ref_column(mut self, column: impl Into<String>) -> Self {
        self.ref_column = Some(column.into());
        self
    }

    /// Returns the resolved reference target, if the field has one.
    ///
    /// An empty `ref` means no reference, and an empty `refColumn` falls
    /// back to the default column.
    pub fn reference(&self) -> Option<Reference> {
        let entity = self.reference.as_deref().filter(|entity| !entity.is_empty())?;
        let column = self.ref_column.as_deref().filter(|column| !column.is_empty());
        Some(Reference::new(entity, column))
    }

    /// Returns `true` if the column may hold null.
    pub fn nullable(&self) -> bool {
        !self.required
    }
}
