pub mod compile;
pub use compile::{CompiledEntity, CompiledField, Compiler};

mod apply;
pub use apply::apply_schema;

pub mod pipeline;
pub use pipeline::{Builder, Kiln, Outcome, Report, Stage, StageOutcome};

pub mod store;
pub use store::{ArtifactStore, FileStore};

pub use kiln_codegen::Options as CodegenOptions;
pub use kiln_core::{
    async_trait,
    driver::{self, Dialect},
    schema::{self, VerifyOptions},
    EntityDescriptor, Error, FieldDescriptor, FieldType, Result,
};
