//! Text commands accepted by the command driver
//!
//! One command per line, whitespace separated, verbs case-insensitive:
//!
//! ```text
//! SET <key> <value> [expires_at]
//! GET <key>
//! DEL <key>
//! HAS <key>
//! SIZE
//! LEN
//! QUIT
//! ```
//!
//! Keys and values cannot contain whitespace.

use std::str::FromStr;

use crate::cache::expires_in;
use crate::error::{CacheError, Result};
use crate::models::Reply;
use crate::tasks::CacheHandle;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set {
        key: String,
        value: String,
        /// Absolute Unix seconds; None applies the default TTL
        expires_at: Option<i64>,
    },
    Get { key: String },
    Delete { key: String },
    Has { key: String },
    Size,
    Len,
    Quit,
}

impl FromStr for Command {
    type Err = CacheError;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let verb = parts
            .next()
            .ok_or_else(|| CacheError::InvalidCommand("empty command".to_string()))?
            .to_ascii_uppercase();
        let args: Vec<&str> = parts.collect();

        let command = match (verb.as_str(), args.as_slice()) {
            ("SET", [key, value]) => Command::Set {
                key: key.to_string(),
                value: value.to_string(),
                expires_at: None,
            },
            ("SET", [key, value, expires_at]) => Command::Set {
                key: key.to_string(),
                value: value.to_string(),
                expires_at: Some(expires_at.parse().map_err(|_| {
                    CacheError::InvalidCommand(format!("invalid timestamp: {}", expires_at))
                })?),
            },
            ("GET", [key]) => Command::Get {
                key: key.to_string(),
            },
            ("DEL", [key]) => Command::Delete {
                key: key.to_string(),
            },
            ("HAS", [key]) => Command::Has {
                key: key.to_string(),
            },
            ("SIZE", []) => Command::Size,
            ("LEN", []) => Command::Len,
            ("QUIT", []) => Command::Quit,
            ("SET" | "GET" | "DEL" | "HAS" | "SIZE" | "LEN" | "QUIT", _) => {
                return Err(CacheError::InvalidCommand(format!(
                    "wrong number of arguments for {}",
                    verb
                )))
            }
            _ => {
                return Err(CacheError::InvalidCommand(format!(
                    "unknown command: {}",
                    verb
                )))
            }
        };

        Ok(command)
    }
}

impl Command {
    /// Runs the command against a cache task.
    ///
    /// # Arguments
    /// * `cache` - Handle to the running cache task
    /// * `default_ttl` - Seconds from now used when SET carries no timestamp
    pub async fn execute(self, cache: &CacheHandle, default_ttl: i64) -> Result<Reply> {
        let reply = match self {
            Command::Set {
                key,
                value,
                expires_at,
            } => {
                let expires_at = expires_at.unwrap_or_else(|| expires_in(default_ttl));
                cache.set(key, value, expires_at).await?;
                Reply::Ok
            }
            Command::Get { key } => Reply::from(cache.get(key).await?),
            Command::Delete { key } => {
                cache.delete(key).await?;
                Reply::Ok
            }
            Command::Has { key } => Reply::Bool(cache.has(key).await?),
            Command::Size => Reply::Integer(cache.size().await?),
            Command::Len => Reply::Integer(cache.len().await?),
            Command::Quit => Reply::Ok,
        };

        Ok(reply)
    }
}
