//! Server Configuration

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use aichat_router::{RouteError, RouterConfig};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Router settings are malformed
    #[error(transparent)]
    Router(#[from] RouteError),

    /// `BIND_ADDR` is not a socket address
    #[error("Invalid bind address '{addr}': {source}")]
    BindAddr {
        addr: String,
        source: std::net::AddrParseError,
    },
}

/// Host configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: SocketAddr,

    /// Directory holding the built frontend (`index.html`, wasm, css)
    pub static_dir: PathBuf,

    /// Route table settings shared with the frontend
    pub router: RouterConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
        let bind_addr = addr
            .parse()
            .map_err(|source| ConfigError::BindAddr { addr, source })?;

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());

        Ok(Self {
            bind_addr,
            static_dir: PathBuf::from(static_dir),
            router: RouterConfig::from_env()?,
        })
    }

    /// App shell served for every client-side route
    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }
}
