//! API Module
//!
//! HTTP handlers and routing for the cache server.
//!
//! # Endpoints
//! - `GET /{key}` - Retrieve a value by key
//! - `PUT /{key}` - Store the request body under a key
//! - `DELETE /{key}` - Delete a key
//! - `DELETE /` - Clear the cache
//! - `GET /cache/stats` - Get cache size, capacity and counters
//! - `GET /cache/health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
