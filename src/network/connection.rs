//! Connection Handler
//!
//! Owns the single multiplexed connection to a Redis server.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use redis::aio::MultiplexedConnection;
use redis::{FromRedisValue, Value};

use crate::config::{Endpoint, StoreConfig};
use crate::error::{KvError, Result};
use crate::protocol::{decode, Command, CommandType, WireBytes};

/// A live connection to one Redis endpoint
///
/// Cloning is cheap and yields another handle onto the same socket; the
/// client multiplexes requests from all clones. The socket is released once
/// the last clone is dropped.
#[derive(Clone)]
pub struct Connection {
    /// Multiplexed client connection
    inner: MultiplexedConnection,

    /// Endpoint description for logging (credentials masked)
    endpoint: Arc<str>,

    /// Per-command time limit
    response_timeout: Option<Duration>,
}

impl Connection {
    /// Connect to `endpoint` and confirm the server answers
    ///
    /// Every failure, including a malformed URI, is reported as
    /// [`KvError::Connection`].
    pub async fn open(endpoint: &Endpoint, config: &StoreConfig) -> Result<Self> {
        let display: Arc<str> = Arc::from(endpoint.to_string());

        let client = match endpoint {
            Endpoint::Tcp { port: 0, .. } => {
                return Err(KvError::Connection(format!(
                    "invalid port 0 for {}",
                    display
                )));
            }
            Endpoint::Tcp { host, port } => redis::Client::open((host.to_string(), *port)),
            Endpoint::Uri(uri) => redis::Client::open(uri.as_str()),
        }
        .map_err(|e| KvError::Connection(format!("invalid endpoint {}: {}", display, e)))?;

        // One deadline covers both the handshake and the PING proving the
        // server answers.
        let connect_timeout = config.connect_timeout();
        let handshake = async {
            let mut inner = client
                .get_multiplexed_async_connection()
                .await
                .map_err(|e| KvError::Connection(format!("failed to connect to {}: {}", display, e)))?;
            let _: Value = Command::Ping
                .to_redis_cmd()
                .query_async(&mut inner)
                .await
                .map_err(|e| KvError::Connection(format!("{} did not answer PING: {}", display, e)))?;
            Ok::<_, KvError>(inner)
        };
        let inner = tokio::time::timeout(connect_timeout, handshake)
            .await
            .map_err(|_| {
                KvError::Connection(format!(
                    "timed out connecting to {} after {:?}",
                    display, connect_timeout
                ))
            })??;

        let connection = Self {
            inner,
            endpoint: display,
            response_timeout: config.response_timeout(),
        };

        tracing::debug!("Connection established to {}", connection.endpoint);
        Ok(connection)
    }

    /// Execute a command and return its payload
    ///
    /// `Get` yields the stored value or `None`; `Put` yields `None`; `Ping`
    /// yields the server's reply.
    pub async fn execute(&self, command: Command) -> Result<Option<Bytes>> {
        let command_type = command.command_type();
        let cmd = command.to_redis_cmd();
        let mut conn = self.inner.clone();

        tracing::trace!("Sending {} to {}", command_type.name(), self.endpoint);

        let request = async move {
            let reply: Value = cmd.query_async(&mut conn).await?;
            Ok::<_, KvError>(reply)
        };

        let reply = match self.response_timeout {
            Some(limit) => tokio::time::timeout(limit, request).await.map_err(|_| {
                KvError::BackendOperation(format!(
                    "{} to {} timed out after {:?}",
                    command_type.name(),
                    self.endpoint,
                    limit
                ))
            })?,
            None => request.await,
        };

        let reply = match reply {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("{} to {} failed: {}", command_type.name(), self.endpoint, e);
                return Err(e);
            }
        };

        match command_type {
            CommandType::Get | CommandType::Ping => {
                let value = Option::<WireBytes>::from_owned_redis_value(reply)?;
                Ok(value.map(decode))
            }
            CommandType::Put => Ok(None),
        }
    }

    /// Get the endpoint string
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("endpoint", &self.endpoint)
            .field("response_timeout", &self.response_timeout)
            .finish()
    }
}
