//! Configuration for kvlink
//!
//! Centralized configuration with sensible defaults.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use crate::error::{KvError, Result};

/// Where a networked store connects to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Plain TCP host and port, no credentials
    Tcp { host: IpAddr, port: u16 },

    /// A backend-scheme URI (`redis://`, `rediss://`, `redis+unix://`),
    /// which may embed credentials and a database index
    Uri(String),
}

impl Endpoint {
    /// Loopback endpoint on the given port
    pub fn local(port: u16) -> Self {
        Endpoint::Tcp {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Tcp { host, port } => write!(f, "{}:{}", host, port),
            // Credentials may sit in the userinfo or in query parameters
            // (`?pass=` on unix sockets); print neither.
            Endpoint::Uri(uri) => {
                let (base, query) = match uri.split_once('?') {
                    Some((base, _)) => (base, "?***"),
                    None => (uri.as_str(), ""),
                };
                match base.rsplit_once('@') {
                    Some((scheme_and_auth, rest)) => {
                        let scheme = scheme_and_auth.split("://").next().unwrap_or("redis");
                        write!(f, "{}://***@{}{}", scheme, rest, query)
                    }
                    None => write!(f, "{}{}", base, query),
                }
            }
        }
    }
}

/// Configuration for opening a store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    // -------------------------------------------------------------------------
    // Connection Configuration
    // -------------------------------------------------------------------------
    /// Host used when a store is opened by port only
    pub default_host: IpAddr,

    /// Time allowed for establishing the connection (milliseconds)
    pub connect_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Request Configuration
    // -------------------------------------------------------------------------
    /// Time allowed for a single command round trip (milliseconds, 0 = none)
    pub response_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            connect_timeout_ms: 5000,
            response_timeout_ms: 5000,
        }
    }
}

impl StoreConfig {
    /// Create a new config builder
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }

    /// Check that the configuration can be used to open a store
    pub fn validate(&self) -> Result<()> {
        if self.connect_timeout_ms == 0 {
            return Err(KvError::Config(
                "connect_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Per-command timeout, `None` when disabled
    pub fn response_timeout(&self) -> Option<Duration> {
        (self.response_timeout_ms > 0).then(|| Duration::from_millis(self.response_timeout_ms))
    }
}

/// Builder for StoreConfig
#[derive(Default)]
pub struct StoreConfigBuilder {
    config: StoreConfig,
}

impl StoreConfigBuilder {
    /// Set the host used when opening by port only
    pub fn default_host(mut self, host: impl Into<IpAddr>) -> Self {
        self.config.default_host = host.into();
        self
    }

    /// Set the connect timeout (in milliseconds)
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.connect_timeout_ms = ms;
        self
    }

    /// Set the per-command response timeout (in milliseconds, 0 disables)
    pub fn response_timeout_ms(mut self, ms: u64) -> Self {
        self.config.response_timeout_ms = ms;
        self
    }

    pub fn build(self) -> StoreConfig {
        self.config
    }
}
