use anyhow::{Context, Result};
use kiln::{Builder, CodegenOptions, Dialect, FileStore, Kiln};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Contents of a `Kiln.toml` file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database the schema is applied to. `--url` and `DATABASE_URL` take
    /// precedence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,

    /// Directory model artifacts are written to
    pub models_dir: PathBuf,

    /// Model artifact file extension, without the leading dot
    pub extension: String,

    /// SQL flavor used by `kiln compile`
    pub flavor: Dialect,

    /// Reject names that are not plain SQL identifiers
    pub strict_identifiers: bool,

    /// Reject repeated field names and fields named like a generated column
    pub unique_columns: bool,

    /// Seconds to wait for a new database connection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<u64>,

    /// Model rendering options
    pub codegen: CodegenOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            models_dir: PathBuf::from(FileStore::DEFAULT_MODELS_DIR),
            extension: FileStore::DEFAULT_EXTENSION.to_string(),
            flavor: Dialect::default(),
            strict_identifiers: false,
            unique_columns: false,
            connect_timeout: None,
            codegen: CodegenOptions::default(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the models directory
    pub fn models_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.models_dir = dir.into();
        self
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        contents
            .parse()
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Save the config to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_string())?;
        Ok(())
    }

    /// Loads the config file, or returns the defaults if it does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if std::fs::exists(&path)? {
            return Self::load(path);
        }
        Ok(Self::default())
    }

    /// Returns a `Kiln` builder configured from this file
    pub(crate) fn builder(&self) -> Builder {
        let mut builder = Kiln::builder();
        builder
            .models_dir(&self.models_dir)
            .extension(&self.extension)
            .codegen(self.codegen.clone())
            .strict_identifiers(self.strict_identifiers)
            .unique_columns(self.unique_columns);
        if let Some(secs) = self.connect_timeout {
            builder.connect_timeout(Duration::from_secs(secs));
        }
        builder
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let toml_str = toml::to_string_pretty(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", toml_str)
    }
}
