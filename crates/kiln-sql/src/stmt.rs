mod column_def;
pub use column_def::{ColumnDef, ColumnDefault};

mod create_table;
pub use create_table::CreateTable;

mod name;
pub use name::Name;

mod references;
pub use references::References;

pub use kiln_core::schema::db::Type;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    CreateTable(CreateTable),
}
