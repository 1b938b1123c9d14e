use crate::domain::{Post, PostId};
use crate::error::BlogError;
use crate::service::BlogService;

use super::QueryState;

/// Which post the user picked, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Follow the collection: the first post is active.
    #[default]
    None,
    Post(PostId),
}

/// Everything a renderer needs for one frame.
#[derive(Debug, PartialEq)]
pub enum View<'a> {
    Loading,
    Error(&'a BlogError),
    /// The fetch succeeded but the store holds no posts.
    Empty,
    Loaded {
        posts: &'a [Post],
        /// `None` when the selection points at a post that is no longer in
        /// the collection.
        active: Option<&'a Post>,
        refreshing: bool,
    },
}

/// Holds the collection query and the selection, and derives the active post.
#[derive(Debug)]
pub struct BlogController {
    query: QueryState<Vec<Post>>,
    selection: Selection,
}

impl Default for BlogController {
    fn default() -> Self {
        Self::new()
    }
}

impl BlogController {
    pub fn new() -> Self {
        Self {
            query: QueryState::Idle,
            selection: Selection::None,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn begin_fetch(&mut self) {
        self.query.begin();
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<Post>, BlogError>) {
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Blog collection fetch failed");
        }
        self.query.settle(result);
    }

    /// Run one fetch cycle against the service.
    pub async fn load(&mut self, service: &BlogService) {
        self.begin_fetch();
        let result = service.fetch_all().await;
        self.finish_fetch(result);
    }

    /// Pick a post. Pure state update; no request is made.
    pub fn select(&mut self, id: PostId) {
        self.selection = Selection::Post(id);
    }

    /// The post shown in the detail pane.
    ///
    /// No selection means the first post. A selection that matches nothing
    /// yields `None` rather than a stale post.
    pub fn active_blog(&self) -> Option<&Post> {
        let posts = self.query.data()?;
        match &self.selection {
            Selection::None => posts.first(),
            Selection::Post(id) => posts.iter().find(|post| &post.id == id),
        }
    }

    /// Select the post after the active one, wrapping around.
    pub fn select_next(&mut self) {
        self.step(1);
    }

    /// Select the post before the active one, wrapping around.
    pub fn select_previous(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: isize) {
        let Some(posts) = self.query.data() else {
            return;
        };
        if posts.is_empty() {
            return;
        }
        let len = posts.len() as isize;
        let next = match self.active_index(posts) {
            Some(current) => (current as isize + delta).rem_euclid(len) as usize,
            None => 0,
        };
        self.selection = Selection::Post(posts[next].id.clone());
    }

    fn active_index(&self, posts: &[Post]) -> Option<usize> {
        match &self.selection {
            Selection::None => Some(0),
            Selection::Post(id) => posts.iter().position(|post| &post.id == id),
        }
    }

    pub fn view(&self) -> View<'_> {
        match &self.query {
            QueryState::Idle | QueryState::Loading => View::Loading,
            QueryState::Error(e) => View::Error(e),
            QueryState::Success { data, .. } if data.is_empty() => View::Empty,
            QueryState::Success { data, refreshing } => View::Loaded {
                posts: data,
                active: self.active_blog(),
                refreshing: *refreshing,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post(id: u64) -> Post {
        Post {
            id: PostId::from(id),
            title: format!("Post {id}"),
            categories: vec!["Finance".into()],
            description: "d".into(),
            published_at: Utc::now(),
            cover_image: "https://example.com/c.png".into(),
            content: "<p>c</p>".into(),
            read_time: None,
        }
    }

    fn loaded(ids: &[u64]) -> BlogController {
        let mut controller = BlogController::new();
        controller.begin_fetch();
        controller.finish_fetch(Ok(ids.iter().copied().map(post).collect()));
        controller
    }

    #[test]
    fn test_pending_fetch_renders_loading() {
        let mut controller = BlogController::new();
        assert_eq!(controller.view(), View::Loading);
        controller.begin_fetch();
        assert_eq!(controller.view(), View::Loading);
        assert_eq!(controller.active_blog(), None);
    }

    #[test]
    fn test_defaults_to_first_post() {
        let controller = loaded(&[3, 1, 2]);
        assert_eq!(controller.active_blog().map(|p| p.id.clone()), Some(PostId::from(3)));
    }

    #[test]
    fn test_selection_picks_matching_post() {
        let mut controller = loaded(&[3, 1, 2]);
        for id in [1, 2, 3] {
            controller.select(PostId::from(id));
            assert_eq!(controller.active_blog().map(|p| &p.id), Some(&PostId::from(id)));
        }
    }

    #[test]
    fn test_missing_selection_yields_no_active_post() {
        let mut controller = loaded(&[1, 2]);
        controller.select(PostId::from(99));
        assert_eq!(controller.active_blog(), None);
        match controller.view() {
            View::Loaded { posts, active, .. } => {
                assert_eq!(posts.len(), 2);
                assert!(active.is_none());
            }
            other => panic!("unexpected view: {other:?}"),
        }
    }

    #[test]
    fn test_empty_collection_renders_empty() {
        let controller = loaded(&[]);
        assert_eq!(controller.view(), View::Empty);
        assert_eq!(controller.active_blog(), None);
    }

    #[test]
    fn test_fetch_error_renders_error() {
        let mut controller = BlogController::new();
        controller.begin_fetch();
        controller.finish_fetch(Err(BlogError::Network("connection refused".into())));
        assert!(matches!(controller.view(), View::Error(BlogError::Network(_))));
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut controller = loaded(&[1, 2, 3]);
        controller.select_previous();
        assert_eq!(controller.selection(), &Selection::Post(PostId::from(3)));
        controller.select_next();
        assert_eq!(controller.selection(), &Selection::Post(PostId::from(1)));
        controller.select_next();
        assert_eq!(controller.selection(), &Selection::Post(PostId::from(2)));
    }

    #[test]
    fn test_next_recovers_from_stale_selection() {
        let mut controller = loaded(&[1, 2]);
        controller.select(PostId::from(42));
        controller.select_next();
        assert_eq!(controller.selection(), &Selection::Post(PostId::from(1)));
    }

    #[test]
    fn test_selection_survives_refetch() {
        let mut controller = loaded(&[1, 2]);
        controller.select(PostId::from(2));
        controller.begin_fetch();
        assert!(matches!(controller.view(), View::Loaded { refreshing: true, .. }));
        controller.finish_fetch(Ok(vec![post(1), post(2), post(3)]));
        assert_eq!(controller.active_blog().map(|p| &p.id), Some(&PostId::from(2)));
    }
}
