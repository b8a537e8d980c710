use super::Error;

use std::path::{Path, PathBuf};

/// Error when a generated model artifact cannot be persisted.
///
/// This occurs when:
/// - The models directory cannot be created
/// - The artifact file cannot be written
#[derive(Debug)]
pub(super) struct ArtifactStoreError {
    entity: Box<str>,
    path: PathBuf,
    inner: std::io::Error,
}

impl std::error::Error for ArtifactStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}

impl core::fmt::Display for ArtifactStoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "failed to store model artifact for `{}` at {}: {}",
            self.entity,
            self.path.display(),
            self.inner
        )
    }
}

impl Error {
    /// Creates an artifact store error tied to the entity being stored.
    pub fn artifact_store(entity: &str, path: impl AsRef<Path>, err: std::io::Error) -> Error {
        Error::from(super::ErrorKind::ArtifactStore(ArtifactStoreError {
            entity: entity.into(),
            path: path.as_ref().to_path_buf(),
            inner: err,
        }))
    }

    /// Returns `true` if this error is an artifact store error.
    pub fn is_artifact_store(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ArtifactStore(_))
    }
}
