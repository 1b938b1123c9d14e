//! In-memory blog store.
//!
//! Stands in for json-server in tests and offline demos. Works within a
//! single process only.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use blog_core::domain::{Post, PostDraft, PostId};
use blog_core::error::BlogError;
use blog_core::ports::BlogStore;

/// In-memory store that assigns sequential numeric ids.
///
/// Failures can be queued with [`InMemoryBlogStore::fail_next_create`] and
/// [`InMemoryBlogStore::fail_next_list`]; each queued error is returned once.
pub struct InMemoryBlogStore {
    posts: RwLock<Vec<Post>>,
    next_id: AtomicU64,
    list_calls: AtomicUsize,
    list_failures: Mutex<VecDeque<BlogError>>,
    create_failures: Mutex<VecDeque<BlogError>>,
}

impl InMemoryBlogStore {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Seed the store. New ids continue after the largest numeric seed id.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let max_id = posts
            .iter()
            .filter_map(|post| post.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            posts: RwLock::new(posts),
            next_id: AtomicU64::new(max_id + 1),
            list_calls: AtomicUsize::new(0),
            list_failures: Mutex::new(VecDeque::new()),
            create_failures: Mutex::new(VecDeque::new()),
        }
    }

    pub async fn fail_next_list(&self, err: BlogError) {
        self.list_failures.lock().await.push_back(err);
    }

    pub async fn fail_next_create(&self, err: BlogError) {
        self.create_failures.lock().await.push_back(err);
    }

    /// Number of `list` calls that reached the store.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

impl Default for InMemoryBlogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogStore for InMemoryBlogStore {
    async fn list(&self) -> Result<Vec<Post>, BlogError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.list_failures.lock().await.pop_front() {
            return Err(err);
        }
        Ok(self.posts.read().await.clone())
    }

    async fn create(&self, draft: &PostDraft) -> Result<Post, BlogError> {
        if let Some(err) = self.create_failures.lock().await.pop_front() {
            return Err(err);
        }
        let id = PostId::from(self.next_id.fetch_add(1, Ordering::SeqCst));
        let post = draft.clone().into_post(id);
        self.posts.write().await.push(post.clone());
        tracing::debug!(id = %post.id, "Stored post in memory");
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn draft(title: &str) -> PostDraft {
        PostDraft {
            title: title.into(),
            categories: vec!["Tech".into()],
            description: "d".into(),
            published_at: Utc::now(),
            cover_image: "https://example.com/c.png".into(),
            content: "<p>c</p>".into(),
            read_time: "5 Mins".into(),
        }
    }

    #[tokio::test]
    async fn test_ids_continue_after_seed() {
        let seeded = draft("seed").into_post(PostId::from(41));
        let store = InMemoryBlogStore::with_posts(vec![seeded]);

        let created = store.create(&draft("new")).await.unwrap();

        assert_eq!(created.id, PostId::from(42));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_queued_failure_is_returned_once() {
        let store = InMemoryBlogStore::new();
        store
            .fail_next_create(BlogError::Validation("title".into()))
            .await;

        assert!(store.create(&draft("a")).await.is_err());
        assert!(store.is_empty().await);
        assert!(store.create(&draft("a")).await.is_ok());
    }
}
