mod field;
mod model;
mod ty;

use crate::schema::{ModelDef, ModelField};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Knobs for the rendered model module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Options {
    /// Module path the connection instance is required from.
    pub connection_module: String,

    /// Identifier that qualifies every data type token.
    pub namespace: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            connection_module: "../db/db".to_string(),
            namespace: "Sequelize".to_string(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connection_module(mut self, module: impl Into<String>) -> Self {
        self.connection_module = module.into();
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}

struct Expand<'a, T> {
    /// What is being rendered
    item: &'a T,

    options: &'a Options,
}

pub(crate) fn model(model: &ModelDef, options: &Options) -> String {
    Expand {
        item: model,
        options,
    }
    .to_string()
}

pub(crate) fn field(field: &ModelField, options: &Options) -> String {
    Expand {
        item: field,
        options,
    }
    .to_string()
}

impl<T> Expand<'_, T> {
    fn nested<'b, U>(&'b self, item: &'b U) -> Expand<'b, U> {
        Expand {
            item,
            options: self.options,
        }
    }
}

/// Writes `value` as a single-quoted string literal.
struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("'")?;
        for c in self.0.chars() {
            match c {
                '\'' => f.write_str("\\'")?,
                '\\' => f.write_str("\\\\")?,
                c => fmt::Write::write_char(f, c)?,
            }
        }
        f.write_str("'")
    }
}
