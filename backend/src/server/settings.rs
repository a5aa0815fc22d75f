//! Application settings loaded via OrthoConfig.
//!
//! Sources, lowest precedence first: configuration file, `TRACKER_*`
//! environment variables, command-line flags.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use exercise_tracker::outbound::persistence::PoolConfig;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_POOL_TIMEOUT_SECS: u64 = 30;

/// Runtime settings for the HTTP server and storage.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRACKER")]
pub struct AppSettings {
    /// Interface to bind.
    #[ortho_config(default = String::from(DEFAULT_HOST))]
    pub host: String,
    /// TCP port to bind.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
    /// PostgreSQL connection string. Without it data lives in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = DEFAULT_POOL_MAX_SIZE)]
    pub pool_max_size: u32,
    /// Idle connections the pool keeps open.
    pub pool_min_idle: Option<u32>,
    /// Seconds to wait for a pooled connection before failing the request.
    #[ortho_config(default = DEFAULT_POOL_TIMEOUT_SECS)]
    pub pool_timeout_secs: u64,
}

impl AppSettings {
    /// Interface to bind.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// TCP port to bind.
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Configured database URL; blank values count as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool settings for the configured database, if any.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        self.database_url().map(|url| {
            PoolConfig::new(url)
                .with_max_size(self.pool_max_size)
                .with_min_idle(self.pool_min_idle)
                .with_connection_timeout(Duration::from_secs(self.pool_timeout_secs))
        })
    }

    /// Resolve `host:port` to the first matching socket address.
    ///
    /// # Errors
    /// Returns an I/O error when the host cannot be resolved.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        (self.host(), self.port())
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| io::Error::other(format!("no address for host {}", self.host())))
    }
}
