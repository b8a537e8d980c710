mod field;
pub use field::CompiledField;

use kiln_codegen::{self as codegen, ModelDef};
use kiln_core::{driver::Dialect, schema::VerifyOptions, EntityDescriptor, Result};
use kiln_sql::{stmt::CreateTable, Serializer, Statement};

/// Compiles entity descriptors into DDL and model artifacts.
///
/// Compilation has no side effects: the same descriptor always yields
/// byte-identical output.
#[derive(Debug)]
pub struct Compiler {
    serializer: Serializer,
    codegen: codegen::Options,
    verify: VerifyOptions,
}

/// The two artifacts generated for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledEntity {
    /// Entity (and table) name
    pub name: String,

    /// `CREATE TABLE` statement
    pub ddl: String,

    /// Model module source
    pub model: String,

    /// Per-field clauses, in declaration order
    pub fields: Vec<CompiledField>,
}

impl Compiler {
    pub fn new(dialect: Dialect) -> Compiler {
        Compiler {
            serializer: Serializer::from(dialect),
            codegen: codegen::Options::default(),
            verify: VerifyOptions::default(),
        }
    }

    pub fn codegen(mut self, options: codegen::Options) -> Self {
        self.codegen = options;
        self
    }

    pub fn verify(mut self, options: VerifyOptions) -> Self {
        self.verify = options;
        self
    }

    /// Verifies and compiles an entity.
    pub fn compile(&self, entity: &EntityDescriptor) -> Result<CompiledEntity> {
        entity.verify(&self.verify)?;

        let table = CreateTable::from_entity(entity);
        let model = ModelDef::from_entity(entity);

        let fields = entity
            .fields
            .iter()
            .map(|field| self.compile_field(field))
            .collect();

        Ok(CompiledEntity {
            name: entity.name.clone(),
            ddl: self.serializer.serialize(&Statement::from(table)),
            model: codegen::generate_model(&model, &self.codegen),
            fields,
        })
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Compiler::new(Dialect::default())
    }
}
