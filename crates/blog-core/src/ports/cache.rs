//! Query cache port.

use async_trait::async_trait;

/// Cache trait - keyed store for serialized query results.
///
/// Entries live until they are invalidated.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Get a value from the cache.
    async fn get(&self, key: &str) -> Option<String>;

    /// Store a value, replacing any previous entry for the key.
    async fn set(&self, key: &str, value: &str);

    /// Discard a cached value so the next read goes to the store.
    async fn invalidate(&self, key: &str);
}
