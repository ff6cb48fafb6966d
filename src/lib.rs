//! # kvlink
//!
//! An asynchronous key-value store abstraction over opaque byte keys and
//! values, with:
//! - A single non-blocking put/get contract shared by every backend
//! - A Redis backend over one multiplexed connection
//! - An in-memory backend for tests and embedding
//! - A byte-identity codec so stored data stays readable by other clients
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Caller                                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  get_async / put_async -> Pending
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  KeyValueStore trait                         │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐               ┌──────────────────┐
//!   │ MemoryKeyValue  │               │ RedisKeyValue    │
//!   │ Store (RwLock)  │               │ Store            │
//!   └─────────────────┘               └────────┬─────────┘
//!                                              │ Command + codec
//!                                              ▼
//!                                     ┌──────────────────┐
//!                                     │  redis client    │
//!                                     │  (multiplexed)   │
//!                                     └──────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod pending;
pub mod store;
pub mod protocol;
pub mod memory;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use config::{Endpoint, StoreConfig};
pub use pending::Pending;
pub use store::KeyValueStore;
pub use memory::MemoryKeyValueStore;
pub use network::RedisKeyValueStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of kvlink
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
