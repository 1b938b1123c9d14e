//! In-memory query cache.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::ports::Cache;

/// In-memory cache using a HashMap behind an async RwLock.
///
/// Shared by every reader in the process; entries are lost on exit.
pub struct InMemoryCache {
    store: RwLock<HashMap<String, String>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        self.store.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        self.store
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        tracing::debug!(key = %key, "Cache entry stored");
    }

    async fn invalidate(&self, key: &str) {
        if self.store.write().await.remove(key).is_some() {
            tracing::debug!(key = %key, "Cache entry invalidated");
        }
    }
}
