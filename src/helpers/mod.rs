//! Helper functions for views
//!
//! Date formatting, HTML escaping and the post list view used by the
//! blog index.

mod date;
mod html;
mod list;

pub use date::*;
pub use html::*;
pub use list::*;
