//! Network Module
//!
//! Redis-backed implementation of the store contract.
//!
//! ## Architecture
//! - One multiplexed connection per store handle
//! - Requests dispatched as tasks on the runtime captured at open time
//! - Keys and values marshalled through the byte codec

mod connection;
mod store;

pub use connection::Connection;
pub use store::RedisKeyValueStore;
