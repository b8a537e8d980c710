use super::{Formatter, Ident, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Ident(&self.name);

        if self.primary_key {
            // SQLite only aliases the rowid for the exact `INTEGER PRIMARY KEY`
            // spelling; PostgreSQL has a dedicated pseudo-type.
            if f.serializer.is_sqlite() {
                fmt!(f, name " INTEGER PRIMARY KEY AUTOINCREMENT");
            } else {
                fmt!(f, name " SERIAL PRIMARY KEY");
            }
            return;
        }

        fmt!(f, name " " self.ty);

        if let Some(references) = &self.references {
            fmt!(f, " " references);
        }

        if self.not_null {
            fmt!(f, " NOT NULL");
        }

        if let Some(default) = &self.default {
            fmt!(f, " DEFAULT " default);
        }
    }
}

impl ToSql for &stmt::References {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let column = Ident(&self.column);
        fmt!(f, "REFERENCES " self.table "(" column ")");
    }
}

impl ToSql for &stmt::ColumnDefault {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::ColumnDefault::CurrentTimestamp => fmt!(f, "CURRENT_TIMESTAMP"),
        }
    }
}
