use super::{ColumnList, Formatter, ToSql};

use crate::stmt;

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = ColumnList(&self.columns);

        if self.if_not_exists {
            fmt!(f, "CREATE TABLE IF NOT EXISTS " self.name " (" columns ")");
        } else {
            fmt!(f, "CREATE TABLE " self.name " (" columns ")");
        }
    }
}
