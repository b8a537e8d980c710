use kiln_core::{async_trait, Error, Result};

use std::{
    fmt::Debug,
    path::{Path, PathBuf},
};

/// Where generated model artifacts are persisted.
#[async_trait]
pub trait ArtifactStore: Debug + Send + Sync + 'static {
    /// Returns the location the artifact for `entity` is written to.
    fn path_for(&self, entity: &str) -> PathBuf;

    /// Writes the artifact for `entity`, replacing any previous artifact at
    /// the same location. Returns the location written.
    async fn store(&self, entity: &str, contents: &str) -> Result<PathBuf>;
}

/// Stores artifacts as `<models_dir>/<entity>.<extension>` files.
#[derive(Debug, Clone)]
pub struct FileStore {
    models_dir: PathBuf,
    extension: String,
}

impl FileStore {
    /// Directory artifacts are written to when none is configured.
    pub const DEFAULT_MODELS_DIR: &'static str = "models/data";

    /// File extension used when none is configured.
    pub const DEFAULT_EXTENSION: &'static str = "js";

    pub fn new(models_dir: impl Into<PathBuf>) -> FileStore {
        FileStore {
            models_dir: models_dir.into(),
            extension: Self::DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Set the artifact file extension, without the leading dot
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }
}

impl Default for FileStore {
    fn default() -> Self {
        FileStore::new(Self::DEFAULT_MODELS_DIR)
    }
}

#[async_trait]
impl ArtifactStore for FileStore {
    fn path_for(&self, entity: &str) -> PathBuf {
        let mut file_name = entity.to_string();
        if !self.extension.is_empty() {
            file_name.push('.');
            file_name.push_str(&self.extension);
        }
        self.models_dir.join(file_name)
    }

    async fn store(&self, entity: &str, contents: &str) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.models_dir)
            .await
            .map_err(|err| Error::artifact_store(entity, &self.models_dir, err))?;

        let path = self.path_for(entity);

        tokio::fs::write(&path, contents)
            .await
            .map_err(|err| Error::artifact_store(entity, &path, err))?;

        Ok(path)
    }
}
