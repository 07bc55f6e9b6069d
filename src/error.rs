//! Startup and serve errors.

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: expected an integer in 0..=65535")]
    InvalidPort { value: String },
    #[error("invalid HOST {value:?}: expected an IP address")]
    InvalidHost { value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("reading .env: {0}")]
    Env(#[from] dotenvy::Error),
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
