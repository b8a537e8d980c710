use super::{driver_for_url, Kiln, Pool};
use crate::{ArtifactStore, Compiler, FileStore};

use kiln_codegen as codegen;
use kiln_core::{driver::Driver, schema::VerifyOptions, Result};

use std::{path::PathBuf, time::Duration};

#[derive(Debug, Default)]
pub struct Builder {
    /// Directory model artifacts are written to, when no store is given
    models_dir: Option<PathBuf>,

    /// Artifact file extension, when no store is given
    extension: Option<String>,

    /// Custom artifact store
    store: Option<Box<dyn ArtifactStore>>,

    codegen: codegen::Options,

    verify: VerifyOptions,

    /// How long a run waits for a new database connection
    connect_timeout: Option<Duration>,
}

impl Builder {
    /// Set the directory model artifacts are written to
    pub fn models_dir(&mut self, dir: impl Into<PathBuf>) -> &mut Self {
        self.models_dir = Some(dir.into());
        self
    }

    /// Set the artifact file extension, without the leading dot
    pub fn extension(&mut self, extension: impl Into<String>) -> &mut Self {
        self.extension = Some(extension.into());
        self
    }

    /// Use a custom artifact store. Overrides `models_dir` and `extension`.
    pub fn store(&mut self, store: impl ArtifactStore) -> &mut Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn codegen(&mut self, options: codegen::Options) -> &mut Self {
        self.codegen = options;
        self
    }

    /// Reject entity, field and reference names that are not plain SQL
    /// identifiers
    pub fn strict_identifiers(&mut self, strict: bool) -> &mut Self {
        self.verify.strict_identifiers = strict;
        self
    }

    /// Reject field names that repeat or collide with a generated column
    pub fn unique_columns(&mut self, unique: bool) -> &mut Self {
        self.verify.unique_columns = unique;
        self
    }

    /// Bound the time a run waits for a new database connection. A run that
    /// times out records a failed schema stage.
    pub fn connect_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Builds a `Kiln` for the database at `url`.
    ///
    /// Connections are opened lazily, by the runs that need them.
    pub fn connect(&mut self, url: &str) -> Result<Kiln> {
        let driver = driver_for_url(url, self.connect_timeout)?;
        self.build_boxed(driver)
    }

    /// Builds a `Kiln` around an existing driver.
    pub fn build(&mut self, driver: impl Driver) -> Result<Kiln> {
        self.build_boxed(Box::new(driver))
    }

    fn build_boxed(&mut self, driver: Box<dyn Driver>) -> Result<Kiln> {
        let compiler = Compiler::new(driver.capability().dialect)
            .codegen(self.codegen.clone())
            .verify(self.verify);

        let store = self.store.take().unwrap_or_else(|| {
            let mut store = FileStore::new(
                self.models_dir
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(FileStore::DEFAULT_MODELS_DIR)),
            );
            if let Some(extension) = &self.extension {
                store = store.extension(extension.clone());
            }
            Box::new(store)
        });

        Ok(Kiln {
            compiler,
            pool: Pool::new(driver, self.connect_timeout)?,
            store,
        })
    }
}
