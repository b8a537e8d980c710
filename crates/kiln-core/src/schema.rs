pub mod db;

mod entity;
pub use entity::EntityDescriptor;

mod field;
pub use field::FieldDescriptor;

mod field_type;
pub use field_type::FieldType;

pub mod model;

mod reference;
pub use reference::Reference;

mod verify;
pub use verify::VerifyOptions;

use crate::Result;
