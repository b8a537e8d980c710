use super::Name;

use kiln_core::schema::Reference;

/// Foreign key target of a column: `REFERENCES <table>(<column>)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct References {
    pub table: Name,
    pub column: String,
}

impl From<Reference> for References {
    fn from(value: Reference) -> Self {
        References {
            table: Name::from(&value.entity),
            column: value.column,
        }
    }
}
