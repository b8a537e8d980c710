use super::Type;

use kiln_core::FieldDescriptor;

/// One attribute of a generated model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelField {
    pub name: String,

    pub ty: Type,

    /// When false, the model rejects null values for the attribute.
    pub allow_null: bool,

    pub references: Option<ModelReference>,
}

/// Association metadata attached to a referencing attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelReference {
    /// Referenced model name.
    pub model: String,

    /// Referenced key attribute.
    pub key: String,
}

impl ModelField {
    /// Lowers a field descriptor to its model attribute.
    ///
    /// Unlike the column definition, a referencing field keeps the type it
    /// was declared with; only the association metadata is added.
    pub fn from_field(field: &FieldDescriptor) -> ModelField {
        ModelField {
            name: field.name.clone(),
            ty: field.ty.model_type(),
            allow_null: field.nullable(),
            references: field.reference().map(|reference| ModelReference {
                model: reference.entity,
                key: reference.column,
            }),
        }
    }
}
