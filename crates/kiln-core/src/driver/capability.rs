use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub struct Capability {
    /// SQL dialect spoken by the database.
    pub dialect: Dialect,
}

/// SQL dialects the DDL serializer can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    #[serde(alias = "postgres")]
    Postgresql,
    Sqlite,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        dialect: Dialect::Sqlite,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        dialect: Dialect::Postgresql,
    };
}

impl std::str::FromStr for Dialect {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Dialect> {
        match s {
            "postgresql" | "postgres" => Ok(Dialect::Postgresql),
            "sqlite" => Ok(Dialect::Sqlite),
            _ => Err(crate::Error::unsupported_feature(format!(
                "unknown SQL dialect `{s}`"
            ))),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Dialect::Postgresql => "postgresql",
            Dialect::Sqlite => "sqlite",
        })
    }
}
