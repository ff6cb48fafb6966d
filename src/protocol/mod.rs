//! Protocol Module
//!
//! Translates store operations into commands understood by the Redis client.
//!
//! The wire format itself belongs to the `redis` crate. This module only
//! supplies two things to it:
//!
//! - a byte-identity codec ([`WireBytes`]) plugged in through the client's
//!   `ToRedisArgs` / `FromRedisValue` hooks
//! - the [`Command`] set issued by the networked backend
//!
//! ### Commands
//! - GET  key        -> bulk string or nil
//! - SET  key value  -> +OK
//! - PING            -> +PONG

mod command;
mod codec;

pub use command::{Command, CommandType};
pub use codec::{decode, encode, WireBytes};
