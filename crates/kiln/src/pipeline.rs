mod builder;
pub use builder::Builder;

mod connect;
pub use connect::driver_for_url;

mod pool;
use pool::Pool;

mod report;
pub use report::{Outcome, Report, Stage, StageOutcome};

use crate::{apply, ArtifactStore, CompiledEntity, Compiler};

use kiln_core::{driver::Driver, EntityDescriptor, FieldDescriptor};
use tracing::{error, info, warn};

/// Compiles entities and applies them to a database and an artifact store.
///
/// A `Kiln` owns a pool of database connections, opened on demand. Each run
/// checks out one connection for its schema statement; a connection the
/// server has closed is replaced on the next run. Artifact writes are not
/// coordinated, and concurrent runs for the same entity leave whichever
/// artifact was written last.
#[derive(Debug)]
pub struct Kiln {
    compiler: Compiler,
    pool: Pool,
    store: Box<dyn ArtifactStore>,
}

impl Kiln {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn compiler(&self) -> &Compiler {
        &self.compiler
    }

    pub fn driver(&self) -> &dyn Driver {
        self.pool.driver()
    }

    pub fn store(&self) -> &dyn ArtifactStore {
        &*self.store
    }

    /// Compiles `fields` as entity `name` and applies both artifacts.
    ///
    /// Only a failure to compile or to store the model artifact fails the
    /// request. A schema that could not be applied is logged and the artifact
    /// is still written.
    pub async fn compile_and_apply(&self, name: &str, fields: Vec<FieldDescriptor>) -> Outcome {
        self.apply_descriptor(&EntityDescriptor::new(name, fields))
            .await
    }

    /// Same as [`Kiln::compile_and_apply`] for an already-built descriptor.
    pub async fn apply_descriptor(&self, entity: &EntityDescriptor) -> Outcome {
        self.run(entity).await.outcome()
    }

    /// Runs every stage and returns the per-stage report.
    pub async fn run(&self, entity: &EntityDescriptor) -> Report {
        let mut report = Report::new(&entity.name);

        let compiled = match self.compiler.compile(entity) {
            Ok(compiled) => {
                report.record(Stage::Compile, StageOutcome::Succeeded);
                compiled
            }
            Err(err) => {
                error!(entity = %entity.name, error = %err, "failed to compile entity");
                report.record(Stage::Compile, StageOutcome::Failed(err));
                return report;
            }
        };

        let schema = self.apply_schema(&compiled).await;
        if schema.is_failed() {
            warn!(entity = %compiled.name, "schema not applied; storing model artifact anyway");
        }
        report.record(Stage::ApplySchema, schema);

        let artifact = self.store_artifact(&compiled, &mut report).await;
        report.record(Stage::StoreArtifact, artifact);

        report.finish();
        report
    }

    async fn apply_schema(&self, compiled: &CompiledEntity) -> StageOutcome {
        let mut connection = match self.pool.get().await {
            Ok(connection) => connection,
            Err(err) => {
                error!(entity = %compiled.name, error = %err, "failed to connect to database");
                return StageOutcome::Failed(err);
            }
        };

        apply::apply_schema(&mut **connection, compiled).await
    }

    async fn store_artifact(&self, compiled: &CompiledEntity, report: &mut Report) -> StageOutcome {
        match self.store.store(&compiled.name, &compiled.model).await {
            Ok(path) => {
                info!(entity = %compiled.name, path = %path.display(), "model artifact written");
                report.artifact_path = Some(path);
                StageOutcome::Succeeded
            }
            Err(err) => {
                error!(entity = %compiled.name, error = %err, "failed to write model artifact");
                StageOutcome::Failed(err)
            }
        }
    }
}
