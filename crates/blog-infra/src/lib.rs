//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`:
//! the HTTP client for the json-server collection endpoint, an in-memory
//! query cache, and an in-memory store used by tests and demos.

pub mod cache;
pub mod store;

pub use cache::InMemoryCache;
pub use store::{HttpBlogStore, HttpStoreConfig, InMemoryBlogStore};
