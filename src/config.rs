//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::error::{CacheError, Result};

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold, 0 = unbounded
    pub capacity: usize,
    /// TTL in seconds applied by the command driver when SET omits a timestamp
    pub default_ttl: i64,
    /// Number of requests the cache task queues before callers wait
    pub channel_size: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries, 0 = unbounded (default: 1000)
    /// - `CACHE_DEFAULT_TTL` - Default TTL in seconds (default: 300)
    /// - `CACHE_CHANNEL_SIZE` - Cache task queue length (default: 64)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    ///
    /// Missing variables take their defaults; present but invalid ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let capacity: i64 = parse_var(&lookup, "CACHE_CAPACITY", defaults.capacity as i64)?;
        let capacity =
            usize::try_from(capacity).map_err(|_| CacheError::InvalidCapacity(capacity))?;

        let default_ttl = parse_var(&lookup, "CACHE_DEFAULT_TTL", defaults.default_ttl)?;

        let channel_size = parse_var(&lookup, "CACHE_CHANNEL_SIZE", defaults.channel_size)?;
        if channel_size == 0 {
            return Err(CacheError::InvalidConfig {
                name: "CACHE_CHANNEL_SIZE".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            capacity,
            default_ttl,
            channel_size,
        })
    }
}

fn parse_var<T, F>(lookup: &F, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| CacheError::InvalidConfig {
                name: name.to_string(),
                reason: format!("{:?}: {}", raw, e),
            }),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 1000,
            default_ttl: 300,
            channel_size: 64,
        }
    }
}
