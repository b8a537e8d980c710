/// The target of a field that references another entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Name of the referenced entity (and table).
    pub entity: String,

    /// Name of the referenced column.
    pub column: String,
}

impl Reference {
    /// Resolves a reference, defaulting the column to `<entity>_id`.
    pub fn new(entity: &str, column: Option<&str>) -> Reference {
        Reference {
            entity: entity.to_string(),
            column: match column {
                Some(column) => column.to_string(),
                None => default_column(entity),
            },
        }
    }
}

/// The key column every entity is generated with.
pub(crate) fn default_column(entity: &str) -> String {
    format!("{entity}_id")
}
