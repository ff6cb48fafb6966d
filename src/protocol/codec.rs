//! Byte codec
//!
//! Lossless mapping between the store's [`Bytes`] keys/values and the
//! representation the Redis client puts on the wire.
//!
//! ## Mapping
//! ```text
//! Bytes ──encode──▶ WireBytes ──ToRedisArgs──▶ one RESP bulk argument
//! Bytes ◀──decode── WireBytes ◀─FromRedisValue─ bulk string reply
//! ```
//!
//! The bytes are never truncated, padded or reinterpreted, so values written
//! through the store are readable by any client that treats replies as raw
//! bytes, and the other way around.

use bytes::Bytes;
use redis::{ErrorKind, FromRedisValue, RedisResult, RedisWrite, ToRedisArgs, Value};

/// Bytes in the form handed to (and received from) the Redis client
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct WireBytes(Bytes);

impl WireBytes {
    /// Borrow the raw bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Encode store bytes into their wire form
pub fn encode(bytes: Bytes) -> WireBytes {
    WireBytes(bytes)
}

/// Decode wire bytes back into store bytes
pub fn decode(wire: WireBytes) -> Bytes {
    wire.0
}

// =============================================================================
// Redis client hooks
// =============================================================================

impl ToRedisArgs for WireBytes {
    fn write_redis_args<W>(&self, out: &mut W)
    where
        W: ?Sized + RedisWrite,
    {
        out.write_arg(&self.0);
    }
}

impl FromRedisValue for WireBytes {
    fn from_redis_value(v: &Value) -> RedisResult<Self> {
        match v {
            Value::BulkString(data) => Ok(WireBytes(Bytes::copy_from_slice(data))),
            Value::SimpleString(s) => Ok(WireBytes(Bytes::copy_from_slice(s.as_bytes()))),
            other => Err(incompatible(other)),
        }
    }

    fn from_owned_redis_value(v: Value) -> RedisResult<Self> {
        match v {
            Value::BulkString(data) => Ok(WireBytes(Bytes::from(data))),
            Value::SimpleString(s) => Ok(WireBytes(Bytes::from(s.into_bytes()))),
            other => Err(incompatible(&other)),
        }
    }
}

fn incompatible(v: &Value) -> redis::RedisError {
    (
        ErrorKind::TypeError,
        "Response was of incompatible type",
        format!("expected binary data, got {:?}", v),
    )
        .into()
}
