//! Memory Module
//!
//! In-process backend for the [`KeyValueStore`](crate::store::KeyValueStore)
//! contract.
//!
//! ## Responsibilities
//! - Byte-exact keys, last write wins
//! - Concurrent readers, one writer at a time
//! - Operations resolve before returning (no runtime needed)
//!
//! ## Data Structure Choice
//! A `HashMap` wrapped in a `parking_lot::RwLock`. No ordering is required
//! because the contract exposes no iteration.

mod store;

pub use store::MemoryKeyValueStore;
