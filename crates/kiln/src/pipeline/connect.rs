use kiln_core::{driver::Driver, Error, Result};

use std::time::Duration;
use url::Url;

/// Picks the driver matching the scheme of `url`.
///
/// `connect_timeout` is passed to drivers that bound their own connect.
pub fn driver_for_url(url: &str, connect_timeout: Option<Duration>) -> Result<Box<dyn Driver>> {
    let parsed = Url::parse(url)
        .map_err(|err| Error::invalid_connection_url(format!("{err}")))?;

    match parsed.scheme() {
        "postgresql" | "postgres" => connect_postgresql(url, connect_timeout),
        "sqlite" => connect_sqlite(url),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported database; scheme={scheme}"
        ))),
    }
}

#[cfg(feature = "postgresql")]
fn connect_postgresql(url: &str, connect_timeout: Option<Duration>) -> Result<Box<dyn Driver>> {
    let mut driver = kiln_driver_postgresql::PostgreSQL::new(url)?;
    if let Some(timeout) = connect_timeout {
        driver = driver.connect_timeout(timeout);
    }
    Ok(Box::new(driver))
}

#[cfg(not(feature = "postgresql"))]
fn connect_postgresql(_url: &str, _connect_timeout: Option<Duration>) -> Result<Box<dyn Driver>> {
    Err(Error::unsupported_feature("`postgresql` feature not enabled"))
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<Box<dyn Driver>> {
    let driver = kiln_driver_sqlite::Sqlite::new(url)?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(_url: &str) -> Result<Box<dyn Driver>> {
    Err(Error::unsupported_feature("`sqlite` feature not enabled"))
}
