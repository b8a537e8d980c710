use super::ModelField;

use kiln_core::EntityDescriptor;

/// A generated model definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDef {
    /// Identifier the model is defined and exported under.
    pub name: String,

    /// Table the model is bound to.
    pub table_name: String,

    pub fields: Vec<ModelField>,

    /// Let the data-access layer maintain the row timestamps.
    pub timestamps: bool,
}

impl ModelDef {
    pub fn from_entity(entity: &EntityDescriptor) -> ModelDef {
        ModelDef {
            name: entity.name.clone(),
            table_name: entity.name.clone(),
            fields: entity.fields.iter().map(ModelField::from_field).collect(),
            timestamps: true,
        }
    }
}
