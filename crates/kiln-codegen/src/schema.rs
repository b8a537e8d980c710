mod field;
pub use field::{ModelField, ModelReference};

mod model;
pub use model::ModelDef;

pub use kiln_core::schema::model::Type;
