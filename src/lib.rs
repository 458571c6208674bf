//! blogpost: loads Markdown/MDX blog posts for a web front-end
//!
//! Posts are read from a flat directory, split into a simple `key: value`
//! front-matter block and a body, sorted newest first and cached in memory.
//! Helpers format publication dates and render the post list view.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use lazy_static::lazy_static;
use std::path::{Path, PathBuf};

pub use content::{Metadata, Post, PostStore};
pub use helpers::format_date;

lazy_static! {
    /// Process-wide store rooted at `<cwd>/app/blog/posts`
    static ref BLOG_POSTS: PostStore = PostStore::new(default_posts_dir());
}

fn default_posts_dir() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(config::BlogConfig::default().posts_dir)
}

/// All blog posts of the current working directory, newest first.
///
/// Scanned once on first call and cached for the rest of the process.
pub fn get_blog_posts() -> &'static [Post] {
    BLOG_POSTS.posts()
}

/// The main blog application
pub struct Blog {
    /// Blog configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Cached posts
    store: PostStore,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = config::BlogConfig::load_from_dir(&base_dir)?;
        Ok(Self::with_config(base_dir, config))
    }

    /// Create a Blog instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::BlogConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_dir = base_dir.join(&config.posts_dir);
        let store = PostStore::with_extensions(posts_dir, config.extensions.clone());

        Self {
            config,
            base_dir,
            store,
        }
    }

    /// Posts directory
    pub fn posts_dir(&self) -> &Path {
        self.store.dir()
    }

    /// All posts, newest first
    pub fn posts(&self) -> &[Post] {
        self.store.posts()
    }

    /// Find a post by slug
    pub fn post(&self, slug: &str) -> Option<&Post> {
        self.store.get(slug)
    }

    /// Render the post list view
    pub fn render_index(&self) -> String {
        helpers::post_list(&self.config, self.posts())
    }

    /// Drop cached posts so the next access rescans the directory
    pub fn reload(&mut self) {
        self.store.reset();
    }
}
