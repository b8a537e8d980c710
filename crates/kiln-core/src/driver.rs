mod capability;
pub use capability::{Capability, Dialect};

use crate::async_trait;

use std::{borrow::Cow, fmt::Debug};

/// A database the compiled schema can be applied to.
///
/// Drivers are connection factories. The orchestrator pools the
/// [`Connection`]s they open and hands one to the schema applier per run, so
/// nothing in the pipeline reaches for an ambient connection.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Returns the URL this driver connects to, with any password redacted
    /// by the caller before display.
    fn url(&self) -> Cow<'_, str>;

    /// Describes the driver's capability, which selects the SQL dialect.
    fn capability(&self) -> &'static Capability;

    /// Opens a new connection.
    async fn connect(&self) -> crate::Result<Box<dyn Connection>>;

    /// Upper bound on simultaneously open connections, if the database has
    /// one.
    fn max_connections(&self) -> Option<usize> {
        None
    }
}

/// A live connection able to execute DDL.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Executes one or more SQL statements that return no rows.
    ///
    /// No transaction is opened around the statements.
    async fn execute(&mut self, sql: &str) -> crate::Result<()>;

    /// Returns `false` once the connection can no longer be used, e.g. after
    /// the server closed it.
    fn is_valid(&self) -> bool {
        true
    }
}
