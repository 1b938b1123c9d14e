//! Application state - the wired-up data access layer.

use std::sync::Arc;

use blog_core::BlogService;
use blog_core::error::BlogError;
use blog_core::ports::{BlogStore, Cache};
use blog_infra::{HttpBlogStore, HttpStoreConfig, InMemoryCache};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<BlogService>,
}

impl AppState {
    /// Build the state against the configured HTTP store.
    pub fn new(store_config: HttpStoreConfig) -> Result<Self, BlogError> {
        let store: Arc<dyn BlogStore> = Arc::new(HttpBlogStore::new(store_config)?);
        Ok(Self::with_store(store))
    }

    /// Build the state over any store, with a fresh in-memory query cache.
    pub fn with_store(store: Arc<dyn BlogStore>) -> Self {
        let cache: Arc<dyn Cache> = Arc::new(InMemoryCache::new());
        Self {
            service: Arc::new(BlogService::new(store, cache)),
        }
    }
}
