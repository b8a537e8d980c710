//! Connection pooling for the schema stage.

use kiln_core::{
    driver::{Connection, Driver},
    err, Error, Result,
};

use std::{
    ops::{Deref, DerefMut},
    time::Duration,
};

use deadpool::managed::{Metrics, PoolError, RecycleError, RecycleResult};

/// Connections to one database, opened on demand.
#[derive(Debug)]
pub(crate) struct Pool {
    inner: deadpool::managed::Pool<Manager>,
}

impl Pool {
    /// Creates a pool over `driver`. No connection is opened until the first
    /// [`Pool::get`].
    pub(crate) fn new(driver: Box<dyn Driver>, connect_timeout: Option<Duration>) -> Result<Self> {
        let max_connections = driver.max_connections();
        let mut builder = deadpool::managed::Pool::builder(Manager { driver })
            .runtime(deadpool::Runtime::Tokio1)
            .create_timeout(connect_timeout);

        if let Some(max_connections) = max_connections {
            builder = builder.max_size(max_connections);
        }

        let inner = builder.build().map_err(Error::connection_pool)?;
        Ok(Self { inner })
    }

    /// Checks out a connection, opening a new one if none is idle.
    pub(crate) async fn get(&self) -> Result<PoolConnection> {
        let connection = self.inner.get().await.map_err(|err| match err {
            PoolError::Backend(err) => err,
            err => Error::connection_pool(err),
        })?;
        Ok(PoolConnection { inner: connection })
    }

    pub(crate) fn driver(&self) -> &dyn Driver {
        &*self.inner.manager().driver
    }
}

#[derive(Debug)]
struct Manager {
    driver: Box<dyn Driver>,
}

impl deadpool::managed::Manager for Manager {
    type Type = Box<dyn Connection>;
    type Error = Error;

    async fn create(&self) -> Result<Self::Type> {
        self.driver.connect().await
    }

    async fn recycle(&self, obj: &mut Self::Type, _metrics: &Metrics) -> RecycleResult<Self::Error> {
        if obj.is_valid() {
            Ok(())
        } else {
            Err(RecycleError::Backend(err!("connection is closed")))
        }
    }
}

/// A connection checked out of a [`Pool`].
///
/// When dropped, the connection is returned to the pool. A connection that
/// is no longer valid is discarded the next time it would be handed out.
pub(crate) struct PoolConnection {
    inner: deadpool::managed::Object<Manager>,
}

impl Deref for PoolConnection {
    type Target = Box<dyn Connection>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PoolConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
