//! Memory Store Tests
//!
//! Tests verify the store contract against the in-memory backend:
//! - Round trip, absence and overwrite
//! - Empty keys and values
//! - Use through a trait object
//! - Concurrent access

use std::sync::Arc;
use std::thread;

use bytes::Bytes;
use kvlink::{KeyValueStore, MemoryKeyValueStore};

fn b(bytes: &'static [u8]) -> Bytes {
    Bytes::from_static(bytes)
}

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_store_is_empty() {
    let store = MemoryKeyValueStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn test_put_and_get() {
    let store = MemoryKeyValueStore::new();

    store.put_async(b(&[123]), b(&[10, 12, 13])).unwrap().wait().unwrap();
    let value = store.get_async(b(&[123])).unwrap().wait().unwrap();

    assert_eq!(value, Some(b(&[10, 12, 13])));
}

#[test]
fn test_get_missing_key_is_none() {
    let store = MemoryKeyValueStore::new();
    assert_eq!(store.get_async(b(&[124])).unwrap().wait().unwrap(), None);
}

#[test]
fn test_put_overwrites_existing() {
    let store = MemoryKeyValueStore::new();

    store.put_async(b(b"key"), b(b"value1")).unwrap().wait().unwrap();
    store.put_async(b(b"key"), b(b"value2")).unwrap().wait().unwrap();

    assert_eq!(store.get_async(b(b"key")).unwrap().wait().unwrap(), Some(b(b"value2")));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_empty_key_and_value() {
    let store = MemoryKeyValueStore::new();

    store.put_async(Bytes::new(), Bytes::new()).unwrap().wait().unwrap();

    assert_eq!(store.get_async(Bytes::new()).unwrap().wait().unwrap(), Some(Bytes::new()));
}

#[test]
fn test_keys_are_byte_exact() {
    let store = MemoryKeyValueStore::new();

    store.put_async(b(b"key"), b(b"lower")).unwrap().wait().unwrap();

    assert_eq!(store.get_async(b(b"KEY")).unwrap().wait().unwrap(), None);
    assert_eq!(store.get_async(b(b"key\0")).unwrap().wait().unwrap(), None);
}

#[test]
fn test_with_entries() {
    let store = MemoryKeyValueStore::with_entries(vec![(b(b"a"), b(b"1")), (b(b"b"), b(b"2"))]);

    assert_eq!(store.len(), 2);
    assert_eq!(store.get_async(b(b"b")).unwrap().wait().unwrap(), Some(b(b"2")));
}

#[test]
fn test_close_has_no_effect() {
    let store = MemoryKeyValueStore::new();
    store.put_async(b(b"k"), b(b"v")).unwrap().wait().unwrap();

    store.close().unwrap();

    assert_eq!(store.get_async(b(b"k")).unwrap().wait().unwrap(), Some(b(b"v")));
}

// =============================================================================
// Trait Object Tests
// =============================================================================

#[tokio::test]
async fn test_async_helpers_through_trait_object() {
    let store: Box<dyn KeyValueStore> = Box::new(MemoryKeyValueStore::new());

    store.put(b(b"k"), b(b"v")).await.unwrap();

    assert_eq!(store.get(b(b"k")).await.unwrap(), Some(b(b"v")));
    assert_eq!(store.get(b(b"missing")).await.unwrap(), None);
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_concurrent_writers_and_readers() {
    let store = Arc::new(MemoryKeyValueStore::new());

    let handles: Vec<_> = (0..8u8)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..100u8 {
                    let key = Bytes::from(vec![t, i]);
                    store.put_async(key.clone(), Bytes::from(vec![i])).unwrap().wait().unwrap();
                    let value = store.get_async(key).unwrap().wait().unwrap();
                    assert_eq!(value, Some(Bytes::from(vec![i])));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.len(), 800);
}
