//! lru_kv - A network-accessible key-value store
//!
//! Bounds memory with a fixed-capacity cache that evicts the least
//! recently used entry.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod server;

pub use api::AppState;
pub use cache::CacheStore;
pub use config::Config;
