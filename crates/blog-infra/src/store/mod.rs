//! Blog store implementations.

mod http;
mod memory;

pub use http::{HttpBlogStore, HttpStoreConfig};
pub use memory::InMemoryBlogStore;
