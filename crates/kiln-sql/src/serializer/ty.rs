use super::{Formatter, ToSql};

use crate::stmt;

impl ToSql for stmt::Type {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::Type::Boolean => fmt!(f, "BOOLEAN"),
            stmt::Type::Float => fmt!(f, "FLOAT"),
            stmt::Type::Integer => fmt!(f, "INTEGER"),
            stmt::Type::Json => fmt!(f, "JSON"),
            stmt::Type::Text => fmt!(f, "TEXT"),
            stmt::Type::Timestamp => fmt!(f, "TIMESTAMP"),
            stmt::Type::Uuid => fmt!(f, "UUID"),
            stmt::Type::VarChar(size) => {
                let size = size.to_string();
                let size = &size[..];
                fmt!(f, "VARCHAR(" size ")")
            }
        }
    }
}
