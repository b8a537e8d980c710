#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{ColumnList, Period};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

// Fragment serializers
mod column_def;
mod create_table;
mod name;
mod ty;

use crate::stmt::{ColumnDef, Statement};

use kiln_core::driver::{Capability, Dialect};

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }

    /// Serialize a single column definition, as it appears inside a
    /// `CREATE TABLE` statement.
    pub fn serialize_column_def(&self, column: &ColumnDef) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        column.to_sql(&mut fmt);
        ret
    }
}

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
        }
    }
}

impl From<Dialect> for Serializer {
    fn from(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Postgresql => Serializer::postgresql(),
            Dialect::Sqlite => Serializer::sqlite(),
        }
    }
}

impl From<&Capability> for Serializer {
    fn from(capability: &Capability) -> Self {
        Serializer::from(capability.dialect)
    }
}
