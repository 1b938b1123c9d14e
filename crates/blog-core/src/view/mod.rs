//! List/detail controller and its derived view model.

mod controller;
mod format;
mod query_state;

pub use controller::{BlogController, Selection, View};
pub use format::format_date;
pub use query_state::QueryState;
