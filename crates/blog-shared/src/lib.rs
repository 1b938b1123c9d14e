//! # Blog Shared
//!
//! Wire types of the blog collection endpoint, as json-server speaks them.

pub mod dto;
pub mod response;

pub use dto::{BlogPostDto, NewBlogPostDto, PostIdDto};
pub use response::ErrorResponse;
