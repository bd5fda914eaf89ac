//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

// == Defaults ==
/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8080;
/// Default maximum number of cache entries
pub const DEFAULT_CAPACITY: usize = 100;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the HTTP server binds to
    pub host: String,
    /// HTTP server port
    pub port: u16,
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_HOST` - Bind address (default: 0.0.0.0)
    /// - `CACHE_PORT` - HTTP server port (default: 8080)
    /// - `CACHE_MAX_SIZE` - Maximum cache entries (default: 100)
    ///
    /// Unset variables fall back to their default. A variable that is set
    /// but cannot be parsed is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolves the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("CACHE_HOST") {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    name: "CACHE_HOST",
                    value,
                    reason: "host cannot be empty".to_string(),
                });
            }
            Some(value) => value.trim().to_string(),
            None => DEFAULT_HOST.to_string(),
        };

        Ok(Self {
            host,
            port: parse_var(&lookup, "CACHE_PORT", DEFAULT_PORT)?,
            capacity: parse_var(&lookup, "CACHE_MAX_SIZE", DEFAULT_CAPACITY)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                name,
                value,
                reason: e.to_string(),
            }),
    }
}
