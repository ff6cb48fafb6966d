//! Redis-backed store
//!
//! Implements the store contract on top of a single [`Connection`].

use std::net::IpAddr;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::RwLock;
use tokio::runtime::Handle;

use crate::config::{Endpoint, StoreConfig};
use crate::error::{KvError, Result};
use crate::pending::Pending;
use crate::protocol::Command;
use crate::store::KeyValueStore;

use super::Connection;

/// A key-value store backed by a Redis server
///
/// ## Lifecycle
///
/// ```text
/// open ──▶ Connected ──close()/drop──▶ Closed
/// ```
///
/// A handle only exists once its connection is established, so the
/// "unopened" state cannot be observed. After [`close`](KeyValueStore::close)
/// every `get_async`/`put_async` fails with [`KvError::IllegalState`] without
/// touching the network. Operations already dispatched keep their own
/// reference to the connection and may still complete or fail.
///
/// ## Concurrency
///
/// The handle can be shared across tasks. Requests from all callers are
/// multiplexed over one connection and are not ordered relative to each
/// other: concurrent puts to one key race and the last acknowledged wins.
pub struct RedisKeyValueStore {
    /// `None` once closed
    connection: RwLock<Option<Connection>>,

    /// Runtime operations are dispatched on, captured at open time
    runtime: Handle,

    /// Endpoint the store was opened against
    endpoint: Endpoint,
}

impl RedisKeyValueStore {
    /// Open a store on the loopback address at `port`
    pub async fn open(port: u16) -> Result<Self> {
        let config = StoreConfig::default();
        let endpoint = Endpoint::Tcp {
            host: config.default_host,
            port,
        };
        Self::open_with_config(endpoint, config).await
    }

    /// Open a store at `host:port`
    pub async fn open_with_host(port: u16, host: impl Into<IpAddr>) -> Result<Self> {
        let endpoint = Endpoint::Tcp {
            host: host.into(),
            port,
        };
        Self::open_with_config(endpoint, StoreConfig::default()).await
    }

    /// Open a store from a connection URI such as `redis://127.0.0.1:6379`
    ///
    /// The URI may carry credentials and a database index.
    pub async fn open_uri(uri: &str) -> Result<Self> {
        Self::open_with_config(Endpoint::Uri(uri.to_string()), StoreConfig::default()).await
    }

    /// Open a store with explicit configuration
    ///
    /// Must be called from within a tokio runtime; later operations are
    /// spawned onto that runtime.
    pub async fn open_with_config(endpoint: Endpoint, config: StoreConfig) -> Result<Self> {
        config.validate()?;

        let runtime = Handle::try_current()
            .map_err(|e| KvError::Connection(format!("no async runtime available: {}", e)))?;

        let connection = Connection::open(&endpoint, &config).await?;
        tracing::debug!("Opened Redis store at {}", connection.endpoint());

        Ok(Self {
            connection: RwLock::new(Some(connection)),
            runtime,
            endpoint,
        })
    }

    /// Endpoint the store was opened against
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// True once [`close`](KeyValueStore::close) has been called
    pub fn is_closed(&self) -> bool {
        self.connection.read().is_none()
    }

    fn active_connection(&self) -> Result<Connection> {
        self.connection
            .read()
            .clone()
            .ok_or_else(|| KvError::IllegalState(format!("store for {} is closed", self.endpoint)))
    }
}

#[async_trait]
impl KeyValueStore for RedisKeyValueStore {
    fn get_async(&self, key: Bytes) -> Result<Pending<Option<Bytes>>> {
        let connection = self.active_connection()?;
        Ok(Pending::spawn(&self.runtime, async move {
            connection.execute(Command::Get { key }).await
        }))
    }

    fn put_async(&self, key: Bytes, value: Bytes) -> Result<Pending<()>> {
        let connection = self.active_connection()?;
        Ok(Pending::spawn(&self.runtime, async move {
            connection.execute(Command::Put { key, value }).await.map(|_| ())
        }))
    }

    /// Releases the connection. Closing an already closed store does nothing.
    fn close(&self) -> Result<()> {
        match self.connection.write().take() {
            Some(connection) => {
                tracing::debug!("Closing Redis store at {}", connection.endpoint());
            }
            None => {
                tracing::debug!("Redis store at {} already closed", self.endpoint);
            }
        }
        Ok(())
    }
}

impl Drop for RedisKeyValueStore {
    fn drop(&mut self) {
        if let Some(connection) = self.connection.get_mut().take() {
            tracing::debug!("Releasing Redis store at {} on drop", connection.endpoint());
        }
    }
}

impl std::fmt::Debug for RedisKeyValueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisKeyValueStore")
            .field("endpoint", &self.endpoint.to_string())
            .field("closed", &self.is_closed())
            .finish()
    }
}
