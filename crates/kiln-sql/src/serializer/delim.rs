use super::{Formatter, ToSql};

/// One table element per line, comma terminated, indented by four spaces
pub(super) struct ColumnList<L>(pub(super) L);

/// Period delimited
pub(super) struct Period<L>(pub(super) L);

impl<L> ToSql for ColumnList<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mut s = "\n    ";
        for i in self.0 {
            fmt!(f, s i);
            s = ",\n    ";
        }
        fmt!(f, "\n");
    }
}

impl<L, I> ToSql for Period<L>
where
    L: IntoIterator<Item = I>,
    I: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0.into_iter() {
            fmt!(f, s i);
            s = ".";
        }
    }
}
