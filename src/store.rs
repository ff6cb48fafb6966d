//! Store Module
//!
//! The capability every backend implements.
//!
//! ## Contract
//! - `put_async` schedules a write, overwriting any existing value
//! - `get_async` schedules a read; an unset key resolves to `None`
//! - Both return immediately with a [`Pending`] operation
//! - Operations on an inactive store fail synchronously with
//!   [`KvError::IllegalState`](crate::KvError::IllegalState)
//! - Failures after dispatch are delivered through the pending operation
//! - No caching, no retries: every call reaches the backend once

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;
use crate::pending::Pending;

/// A key-value store over opaque byte keys and values
///
/// Callers should depend on this trait rather than a concrete backend:
///
/// ```ignore
/// async fn remember(store: &dyn KeyValueStore) -> kvlink::Result<()> {
///     store.put(Bytes::from_static(b"k"), Bytes::from_static(b"v")).await?;
///     assert_eq!(store.get(Bytes::from_static(b"k")).await?.as_deref(), Some(&b"v"[..]));
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Schedule retrieval of the value stored under `key`
    fn get_async(&self, key: Bytes) -> Result<Pending<Option<Bytes>>>;

    /// Schedule storage of `value` under `key`
    ///
    /// Empty keys and values are valid.
    fn put_async(&self, key: Bytes, value: Bytes) -> Result<Pending<()>>;

    /// Retrieve the value stored under `key`, or `None` if unset
    async fn get(&self, key: Bytes) -> Result<Option<Bytes>> {
        self.get_async(key)?.await
    }

    /// Store `value` under `key` and wait for the acknowledgement
    async fn put(&self, key: Bytes, value: Bytes) -> Result<()> {
        self.put_async(key, value)?.await
    }

    /// Release any resources held by the store
    ///
    /// Operations in flight when the store is closed may fail rather than
    /// complete.
    fn close(&self) -> Result<()>;
}
