//! Map-backed store implementation

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::RwLock;

use crate::error::Result;
use crate::pending::Pending;
use crate::store::KeyValueStore;

/// A key-value store backed by an in-memory map
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    data: RwLock<HashMap<Bytes, Bytes>>,
}

impl MemoryKeyValueStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`
    pub fn with_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Bytes, Bytes)>,
    {
        Self {
            data: RwLock::new(entries.into_iter().collect()),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    fn get_async(&self, key: Bytes) -> Result<Pending<Option<Bytes>>> {
        let value = self.data.read().get(&key).cloned();
        tracing::trace!(key_len = key.len(), hit = value.is_some(), "memory get");
        Ok(Pending::ready(Ok(value)))
    }

    fn put_async(&self, key: Bytes, value: Bytes) -> Result<Pending<()>> {
        tracing::trace!(key_len = key.len(), value_len = value.len(), "memory put");
        self.data.write().insert(key, value);
        Ok(Pending::ready(Ok(())))
    }

    /// Has no effect for this store.
    fn close(&self) -> Result<()> {
        Ok(())
    }
}
