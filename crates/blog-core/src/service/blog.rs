//! Data access layer: cached collection reads and write-then-invalidate.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::defaults::COLLECTION_KEY;
use crate::domain::{Post, PostDraft};
use crate::error::BlogError;
use crate::ports::{BlogStore, Cache};

/// Reads and writes the post collection through a keyed query cache.
///
/// - `fetch_all` serves the cached collection when present; otherwise one
///   caller at a time goes to the store and fills the cache.
/// - `create` writes to the store and then invalidates the collection. The
///   created post is never merged into the cached list; the next read is the
///   source of truth for store-assigned fields.
pub struct BlogService {
    store: Arc<dyn BlogStore>,
    cache: Arc<dyn Cache>,
    fetch_lock: Mutex<()>,
    /// Held across "check generation, write entry" and across "bump
    /// generation, drop entry" so the two never interleave.
    write_lock: Mutex<()>,
    /// Bumped on every invalidation. A fetch that started under an older
    /// generation does not write its result back.
    generation: AtomicU64,
}

impl BlogService {
    pub fn new(store: Arc<dyn BlogStore>, cache: Arc<dyn Cache>) -> Self {
        Self {
            store,
            cache,
            fetch_lock: Mutex::new(()),
            write_lock: Mutex::new(()),
            generation: AtomicU64::new(0),
        }
    }

    /// Fetch the full collection, from cache when possible.
    pub async fn fetch_all(&self) -> Result<Vec<Post>, BlogError> {
        if let Some(posts) = self.cached().await {
            return Ok(posts);
        }

        let _guard = self.fetch_lock.lock().await;

        // A concurrent caller may have filled the cache while we waited.
        if let Some(posts) = self.cached().await {
            return Ok(posts);
        }

        let generation = self.generation.load(Ordering::Acquire);
        tracing::debug!(key = COLLECTION_KEY, "Fetching collection from store");
        let posts = self.store.list().await?;
        tracing::info!(count = posts.len(), "Fetched blog collection");

        let _write = self.write_lock.lock().await;
        if self.generation.load(Ordering::Acquire) == generation {
            self.write_cache(&posts).await;
        } else {
            tracing::debug!(
                key = COLLECTION_KEY,
                "Collection invalidated during fetch; result not cached"
            );
        }

        Ok(posts)
    }

    /// Create a post and invalidate the cached collection on success.
    pub async fn create(&self, draft: &PostDraft) -> Result<Post, BlogError> {
        let post = self.store.create(draft).await?;
        tracing::info!(id = %post.id, title = %post.title, "Created blog post");
        self.invalidate().await;
        Ok(post)
    }

    /// Discard the cached collection so the next `fetch_all` hits the store.
    pub async fn invalidate(&self) {
        let _write = self.write_lock.lock().await;
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.cache.invalidate(COLLECTION_KEY).await;
    }

    async fn cached(&self) -> Option<Vec<Post>> {
        let raw = self.cache.get(COLLECTION_KEY).await?;
        match serde_json::from_str(&raw) {
            Ok(posts) => {
                tracing::debug!(key = COLLECTION_KEY, "Cache hit");
                Some(posts)
            }
            Err(e) => {
                tracing::warn!(key = COLLECTION_KEY, error = %e, "Discarding unreadable cache entry");
                None
            }
        }
    }

    async fn write_cache(&self, posts: &[Post]) {
        match serde_json::to_string(posts) {
            Ok(raw) => self.cache.set(COLLECTION_KEY, &raw).await,
            Err(e) => tracing::warn!(error = %e, "Failed to serialize collection for cache"),
        }
    }
}
