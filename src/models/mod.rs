//! Request and Response models for the cache server API
//!
//! This module defines the validated request input and the bodies
//! returned by each endpoint.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::PutRequest;
pub use responses::{messages, HealthResponse, StatsResponse};
