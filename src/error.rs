//! Error types for the cache server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised by the cache engine.
///
/// Lookups of absent keys are not errors; they surface as `None` / `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The cache was constructed with a capacity of zero
    #[error("Cache capacity must be greater than 0")]
    InvalidCapacity,
}

// == Config Error Enum ==
/// Errors raised while resolving configuration from the environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but does not parse as the expected type
    #[error("Invalid value {value:?} for environment variable {name}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

// == API Error Enum ==
/// Errors returned by the HTTP handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Key not found in cache
    #[error("{0}")]
    NotFound(String),

    /// Invalid request data
    #[error("{0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, message).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
