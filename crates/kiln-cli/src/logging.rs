use anyhow::{bail, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber. Logs are written to stderr so
/// generated artifacts on stdout stay clean.
///
/// Does nothing when a subscriber is already installed.
pub(crate) fn init(verbosity: &str, format: &str) -> Result<()> {
    let level = match verbosity.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => bail!("unknown log level `{verbosity}`"),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    // An already-installed subscriber is not an error
    let _ = match format {
        "text" => subscriber.try_init(),
        "json" => subscriber.json().try_init(),
        _ => bail!("unknown log format `{format}`; expected text or json"),
    };

    Ok(())
}
