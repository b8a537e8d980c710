use super::{References, Type};

use kiln_core::FieldDescriptor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub ty: Type,

    /// Column is the table's primary key, assigned by the database from a
    /// sequence.
    pub primary_key: bool,

    pub references: Option<References>,
    pub not_null: bool,
    pub default: Option<ColumnDefault>,
}

/// Value a column takes when an insert omits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnDefault {
    CurrentTimestamp,
}

impl ColumnDef {
    fn new(name: impl Into<String>, ty: Type) -> ColumnDef {
        ColumnDef {
            name: name.into(),
            ty,
            primary_key: false,
            references: None,
            not_null: false,
            default: None,
        }
    }

    /// Lowers a field descriptor to its column definition.
    ///
    /// A referencing field is always an integer column pointing at the
    /// referenced key, whatever type it was declared with.
    pub fn from_field(field: &FieldDescriptor) -> ColumnDef {
        let mut column = match field.reference() {
            Some(reference) => ColumnDef {
                references: Some(reference.into()),
                ..ColumnDef::new(&field.name, Type::REFERENCE)
            },
            None => ColumnDef::new(&field.name, field.ty.sql_type()),
        };

        column.not_null = field.required;
        column
    }

    /// An auto-incrementing integer primary key.
    pub fn serial_primary_key(name: impl Into<String>) -> ColumnDef {
        ColumnDef {
            primary_key: true,
            ..ColumnDef::new(name, Type::Integer)
        }
    }

    /// A timestamp column defaulting to the time of insertion.
    pub fn timestamp_default_now(name: impl Into<String>) -> ColumnDef {
        ColumnDef {
            default: Some(ColumnDefault::CurrentTimestamp),
            ..ColumnDef::new(name, Type::Timestamp)
        }
    }
}
