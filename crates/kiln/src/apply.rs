use crate::{CompiledEntity, StageOutcome};

use kiln_core::driver::Connection;
use tracing::{debug, error, info};

/// Executes an entity's DDL once over `connection`.
///
/// Failures are logged and returned as [`StageOutcome::Failed`]; this
/// function never errors. The statement is existence-guarded, so repeating it
/// for an existing table succeeds without changing anything.
pub async fn apply_schema(
    connection: &mut dyn Connection,
    compiled: &CompiledEntity,
) -> StageOutcome {
    debug!(entity = %compiled.name, sql = %compiled.ddl, "applying schema");

    match connection.execute(&compiled.ddl).await {
        Ok(()) => {
            info!(entity = %compiled.name, "table created");
            StageOutcome::Succeeded
        }
        Err(err) => {
            error!(entity = %compiled.name, error = %err, "failed to create table");
            StageOutcome::Failed(err)
        }
    }
}
