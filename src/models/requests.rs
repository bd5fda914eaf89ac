//! Request DTOs for the cache server API
//!
//! Collects the pieces of an incoming PUT request for validation.

/// A store request assembled from the `PUT /{key}` path and body.
///
/// # Fields
/// - `key`: The cache key taken from the path
/// - `value`: The raw request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
}

impl PutRequest {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.value.is_empty() {
            return Some("Value cannot be empty".to_string());
        }
        None
    }
}
