//! Response DTOs for the cache server API
//!
//! Plain-text messages for key operations and JSON bodies for the
//! stats and health endpoints.

use serde::Serialize;

use crate::cache::CacheStats;

/// Text bodies returned by the key endpoints.
pub mod messages {
    pub const KEY_NOT_FOUND: &str = "Key not found";
    pub const VALUE_STORED: &str = "Value stored successfully";
    pub const KEY_REMOVED: &str = "Key removed successfully";
    pub const CACHE_CLEARED: &str = "Cache cleared successfully";
}

/// Response body for the stats endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Current number of entries in cache
    pub size: usize,
    /// Maximum number of entries
    pub capacity: usize,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            size: stats.size,
            capacity: stats.capacity,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /cache/health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
