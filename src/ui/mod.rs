//! UI components module.
//!
//! Contains ratatui widgets for displaying the dashboard.

pub mod header;
pub mod list;
pub mod modal;

pub use header::render_header;
pub use list::{food_index_at, render_list};
pub use modal::render_modal;
