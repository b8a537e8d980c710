mod apply;
mod compile;
mod config;
mod descriptor;
mod init;
mod logging;
mod utility;

pub use apply::ApplyCommand;
pub use compile::CompileCommand;
pub use config::Config;
pub use descriptor::{load_descriptors, parse_descriptors};
pub use init::InitCommand;

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Kiln CLI library for building custom command-line tools
#[derive(Debug, Default)]
pub struct KilnCli {
    /// Overrides the configuration file named by `--config`
    config: Option<Config>,
}

impl KilnCli {
    /// Create a new KilnCli that reads its configuration from `--config`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new KilnCli with a fixed configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            config: Some(config),
        }
    }

    /// Parse and execute CLI commands from command-line arguments
    pub async fn parse_and_run(&self) -> Result<()> {
        let cli = Cli::parse();
        self.run(cli).await
    }

    /// Parse and execute CLI commands from an iterator of arguments
    pub async fn parse_from<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::parse_from(args);
        self.run(cli).await
    }

    async fn run(&self, cli: Cli) -> Result<()> {
        logging::init(&cli.log_level, &cli.log_format)?;

        match cli.command {
            Command::Compile(cmd) => cmd.run(&self.load_config(&cli.config)?),
            Command::Apply(cmd) => cmd.run(&self.load_config(&cli.config)?).await,
            // `init` creates the configuration file, so it must not read one
            Command::Init(cmd) => cmd.run(&cli.config),
        }
    }

    fn load_config(&self, path: &Path) -> Result<Config> {
        match &self.config {
            Some(config) => Ok(config.clone()),
            None => Config::load_or_default(path),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "kiln")]
#[command(about = "Kiln - compile entity descriptors into tables and models")]
#[command(version)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "Kiln.toml")]
    config: PathBuf,

    /// Log verbosity: trace, debug, info, warn, error. `RUST_LOG` takes
    /// precedence when set.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Log format: text or json
    #[arg(long, global = true, default_value = "text")]
    log_format: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Print the DDL and model generated for a descriptor file
    Compile(CompileCommand),

    /// Create the tables and write the models for a descriptor file
    Apply(ApplyCommand),

    /// Write a default configuration file
    Init(InitCommand),
}
