use super::{ColumnDef, Name, Statement};

use kiln_core::EntityDescriptor;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Name of the table
    pub name: Name,

    /// When true, creating a table that already exists is not an error.
    pub if_not_exists: bool,

    /// Column definitions, in table order
    pub columns: Vec<ColumnDef>,
}

impl CreateTable {
    /// Lowers an entity to its table definition.
    ///
    /// The primary key comes first, then one column per field in declaration
    /// order, then the two timestamp columns.
    pub fn from_entity(entity: &EntityDescriptor) -> CreateTable {
        let mut columns = Vec::with_capacity(entity.fields.len() + 3);

        columns.push(ColumnDef::serial_primary_key(entity.primary_key()));
        columns.extend(entity.fields.iter().map(ColumnDef::from_field));
        columns.push(ColumnDef::timestamp_default_now(
            EntityDescriptor::CREATED_AT,
        ));
        columns.push(ColumnDef::timestamp_default_now(
            EntityDescriptor::UPDATED_AT,
        ));

        CreateTable {
            name: Name::from(&entity.name),
            if_not_exists: true,
            columns,
        }
    }
}

impl Statement {
    pub fn create_table(entity: &EntityDescriptor) -> Self {
        CreateTable::from_entity(entity).into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
