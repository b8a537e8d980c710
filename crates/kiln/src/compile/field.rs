use super::Compiler;

use kiln_codegen::{self as codegen, ModelField};
use kiln_core::FieldDescriptor;
use kiln_sql::stmt::ColumnDef;

/// The column clause and model attribute generated for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledField {
    pub ddl: String,
    pub model: String,
}

impl Compiler {
    /// Compiles a single field.
    ///
    /// Fields are not verified on their own; [`Compiler::compile`] verifies
    /// them in the context of their entity.
    pub fn compile_field(&self, field: &FieldDescriptor) -> CompiledField {
        CompiledField {
            ddl: self
                .serializer
                .serialize_column_def(&ColumnDef::from_field(field)),
            model: codegen::generate_field(&ModelField::from_field(field), &self.codegen),
        }
    }
}
