use super::{Expand, Quoted};
use crate::schema::ModelDef;

use std::fmt;

impl fmt::Display for Expand<'_, ModelDef> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.item;

        writeln!(f, "const {{ Sequelize, DataTypes }} = require('sequelize');")?;
        writeln!(
            f,
            "const sequelize = require({});",
            Quoted(&self.options.connection_module)
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "const {} = sequelize.define({}, {{",
            model.name,
            Quoted(&model.name)
        )?;

        let mut s = "    ";
        for field in &model.fields {
            write!(f, "{s}{}", self.nested(field))?;
            s = ",\n    ";
        }
        writeln!(f)?;

        writeln!(f, "}}, {{")?;
        writeln!(f, "    timestamps: {},", model.timestamps)?;
        writeln!(f, "    tableName: {},", Quoted(&model.table_name))?;
        writeln!(f, "}});")?;
        writeln!(f)?;
        writeln!(f, "module.exports = {};", model.name)
    }
}
