use async_trait::async_trait;

use crate::domain::{Post, PostDraft};
use crate::error::BlogError;

/// Blog store - the external collection endpoint.
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Read the whole collection in store order.
    async fn list(&self) -> Result<Vec<Post>, BlogError>;

    /// Append one post. The returned post carries the store-assigned id.
    async fn create(&self, draft: &PostDraft) -> Result<Post, BlogError>;
}
