//! Post store - lazily loads, sorts and caches the posts of one directory
//!
//! The store starts out empty and scans its directory on first access. The
//! sorted result is then kept for the lifetime of the store: later reads
//! never touch the filesystem. [`PostStore::reset`] drops the cached posts
//! so the next read scans again.

use std::cmp::Reverse;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::loader::{load_posts, DEFAULT_EXTENSIONS};
use super::Post;

/// In-memory cache of the posts found in a directory
#[derive(Debug)]
pub struct PostStore {
    dir: PathBuf,
    extensions: Vec<String>,
    posts: OnceLock<Vec<Post>>,
}

impl PostStore {
    /// Create a store for `.md` and `.mdx` files in `dir`
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        let extensions = DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect();
        Self::with_extensions(dir, extensions)
    }

    /// Create a store accepting the given file extensions
    pub fn with_extensions<P: Into<PathBuf>>(dir: P, extensions: Vec<String>) -> Self {
        Self {
            dir: dir.into(),
            extensions,
            posts: OnceLock::new(),
        }
    }

    /// Directory this store reads from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// All posts, newest first.
    ///
    /// The first call scans the directory; concurrent first callers wait for
    /// that single scan. Every call returns the same slice afterwards.
    pub fn posts(&self) -> &[Post] {
        self.posts.get_or_init(|| self.scan())
    }

    /// Find a post by slug
    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.posts().iter().find(|p| p.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.posts().len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts().is_empty()
    }

    /// Whether the directory has been scanned
    pub fn is_populated(&self) -> bool {
        self.posts.get().is_some()
    }

    /// Forget the cached posts; the next read scans again
    pub fn reset(&mut self) {
        if self.posts.take().is_some() {
            tracing::debug!("Cleared post cache for {:?}", self.dir);
        }
    }

    fn scan(&self) -> Vec<Post> {
        tracing::debug!("Scanning {:?} for posts", self.dir);
        let mut posts = load_posts(&self.dir, &self.extensions);
        sort_posts(&mut posts);
        tracing::debug!("Cached {} posts from {:?}", posts.len(), self.dir);
        posts
    }
}

/// Sort posts by `publishedAt`, newest first.
///
/// Posts with an unparsable date sort as the epoch (last); equal dates keep
/// their existing order.
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by_cached_key(|post| Reverse(post.sort_key()));
}
