//! Command definitions
//!
//! Represents the requests the networked backend sends to Redis.

use bytes::Bytes;

use super::codec::encode;

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Get,
    Put,
    Ping,
}

impl CommandType {
    /// Redis command name
    pub fn name(&self) -> &'static str {
        match self {
            CommandType::Get => "GET",
            CommandType::Put => "SET",
            CommandType::Ping => "PING",
        }
    }
}

/// A store request
#[derive(Debug, Clone)]
pub enum Command {
    /// Get a value by key
    Get { key: Bytes },

    /// Put a key-value pair, replacing any existing value
    Put { key: Bytes, value: Bytes },

    /// Ping (health check)
    Ping,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Get { .. } => CommandType::Get,
            Command::Put { .. } => CommandType::Put,
            Command::Ping => CommandType::Ping,
        }
    }

    /// Build the client command, encoding keys and values through the codec
    pub fn to_redis_cmd(&self) -> redis::Cmd {
        let mut cmd = redis::cmd(self.command_type().name());
        match self {
            Command::Get { key } => {
                cmd.arg(encode(key.clone()));
            }
            Command::Put { key, value } => {
                cmd.arg(encode(key.clone())).arg(encode(value.clone()));
            }
            Command::Ping => {}
        }
        cmd
    }
}
