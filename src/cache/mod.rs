//! Cache Module
//!
//! Provides a generic, fixed-capacity, thread-safe cache with LRU eviction.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::Entry;
pub use lru::{Iter, LruTracker};
pub use stats::CacheStats;
pub use store::CacheStore;
