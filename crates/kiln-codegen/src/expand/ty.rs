use super::Expand;
use crate::schema::Type;

use std::fmt;

impl fmt::Display for Expand<'_, Type> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = &self.options.namespace;

        match self.item {
            Type::Boolean => write!(f, "{ns}.BOOLEAN"),
            Type::Date => write!(f, "{ns}.DATE"),
            Type::Float => write!(f, "{ns}.FLOAT"),
            Type::Integer => write!(f, "{ns}.INTEGER"),
            Type::Json => write!(f, "{ns}.JSON"),
            Type::String => write!(f, "{ns}.STRING"),
            Type::Text => write!(f, "{ns}.TEXT"),
            Type::Uuid => write!(f, "{ns}.UUID"),
            Type::Array(item) => write!(f, "{ns}.ARRAY({})", self.nested(&**item)),
        }
    }
}
