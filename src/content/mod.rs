//! Content module - handles posts, front-matter and the post cache

mod frontmatter;
pub mod loader;
mod post;
mod store;

pub use frontmatter::{parse_frontmatter, Metadata};
pub use loader::LoadError;
pub use post::{slug_for, Post};
pub use store::{sort_posts, PostStore};
