//! API Handlers
//!
//! HTTP request handlers translating each route into cache engine calls.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{error, info};

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{ApiError, CacheError, Result};
use crate::models::{messages, HealthResponse, PutRequest, StatsResponse};

/// Application state shared across all handlers.
///
/// The cache synchronizes internally, so handlers share it through a plain
/// `Arc` and never hold a lock across an await point.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: Arc<CacheStore<String, String>>,
}

impl AppState {
    /// Creates a new AppState with the given cache store.
    pub fn new(cache: CacheStore<String, String>) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if the configured capacity is zero.
    pub fn from_config(config: &Config) -> std::result::Result<Self, CacheError> {
        let cache = CacheStore::new(config.capacity)?;
        Ok(Self::new(cache))
    }
}

/// Handler for GET /{key}
///
/// Returns the stored value as the response body.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<String> {
    match state.cache.get(key.as_str()) {
        Some(value) => {
            info!("Cache hit for key: {}", key);
            Ok(value)
        }
        None => {
            info!("Cache miss for key: {}", key);
            Err(ApiError::NotFound(messages::KEY_NOT_FOUND.to_string()))
        }
    }
}

/// Handler for PUT /{key}
///
/// Stores the request body under `key`. Empty keys and bodies are rejected.
pub async fn put_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    body: String,
) -> Result<&'static str> {
    let req = PutRequest::new(key, body);
    if let Some(error_msg) = req.validate() {
        error!("Rejected PUT for key {:?}: {}", req.key, error_msg);
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let key = req.key.clone();
    state.cache.put(req.key, req.value);
    info!("Stored value for key: {}", key);

    Ok(messages::VALUE_STORED)
}

/// Handler for DELETE /{key}
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<&'static str> {
    if state.cache.remove(key.as_str()) {
        info!("Removed key: {}", key);
        Ok(messages::KEY_REMOVED)
    } else {
        info!("Key not found for deletion: {}", key);
        Err(ApiError::NotFound(messages::KEY_NOT_FOUND.to_string()))
    }
}

/// Handler for DELETE /
///
/// Removes every entry from the cache.
pub async fn clear_handler(State(state): State<AppState>) -> &'static str {
    state.cache.clear();
    info!("Cache cleared");
    messages::CACHE_CLEARED
}

/// Handler for GET /cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats();
    info!(
        "Stats requested: size={}, capacity={}",
        stats.size, stats.capacity
    );

    Json(StatsResponse::from(stats))
}

/// Handler for GET /cache/health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
