//! # Blog Core
//!
//! The domain layer of the blog reader.
//! This crate contains the post model, the query cache rules, the list/detail
//! selection model and the create-post form. It has no HTTP or terminal
//! dependencies; adapters live in `blog-infra`.

pub mod defaults;
pub mod domain;
pub mod error;
pub mod form;
pub mod ports;
pub mod service;
pub mod view;

pub use error::{BlogError, ErrorKind};
pub use service::BlogService;
