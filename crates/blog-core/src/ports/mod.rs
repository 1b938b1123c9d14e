//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod cache;
mod store;

pub use cache::Cache;
pub use store::BlogStore;
