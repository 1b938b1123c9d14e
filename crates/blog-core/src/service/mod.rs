//! Services - orchestration over the ports.

mod blog;

pub use blog::BlogService;
