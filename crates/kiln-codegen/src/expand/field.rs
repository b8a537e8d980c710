use super::{Expand, Quoted};
use crate::schema::{ModelField, ModelReference};

use std::fmt;

impl fmt::Display for Expand<'_, ModelField> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.item;

        write!(f, "{}: {{ type: {}", field.name, self.nested(&field.ty))?;

        if !field.allow_null {
            f.write_str(", allowNull: false")?;
        }

        if let Some(references) = &field.references {
            write!(f, ", {}", self.nested(references))?;
        }

        f.write_str(" }")
    }
}

impl fmt::Display for Expand<'_, ModelReference> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "references: {{ model: {}, key: {} }}",
            Quoted(&self.item.model),
            Quoted(&self.item.key)
        )
    }
}
