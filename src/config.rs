//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub environment: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT, environment: DEFAULT_ENVIRONMENT.to_owned() }
    }
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `ENVIRONMENT`: deployment label reported by `/health`, default `development`
    ///
    /// # Errors
    ///
    /// Returns an error if `HOST` or `PORT` is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if `HOST` or `PORT` is present but does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match non_blank(lookup("HOST")) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost { value: raw })?,
            None => DEFAULT_HOST,
        };
        let port = match non_blank(lookup("PORT")) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };
        let environment = non_blank(lookup("ENVIRONMENT")).unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_owned());

        Ok(Self { host, port, environment })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Load `.env` into the process environment if one exists.
///
/// # Errors
///
/// A missing file is `Ok(None)`. Unreadable or malformed files are errors.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    accept_dotenv(dotenvy::dotenv())
}

fn accept_dotenv(result: Result<PathBuf, dotenvy::Error>) -> Result<Option<PathBuf>, dotenvy::Error> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
