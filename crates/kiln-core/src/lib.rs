#[macro_use]
mod macros;

pub mod driver;
pub use driver::{Capability, Connection, Driver};

mod error;
pub use error::Error;

pub mod schema;
pub use schema::{EntityDescriptor, FieldDescriptor, FieldType};

/// A Result type alias that uses Kiln's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
