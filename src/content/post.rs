//! Post model

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::Metadata;
use crate::helpers::timestamp_millis;

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Parsed front-matter
    pub metadata: Metadata,

    /// Slug (file name without extension)
    pub slug: String,

    /// Body with the front-matter removed, trimmed
    pub content: String,
}

impl Post {
    /// Build a post from a raw document
    pub fn from_source(slug: impl Into<String>, raw: &str) -> Self {
        let (metadata, content) = Metadata::parse(raw);
        Self {
            metadata,
            slug: slug.into(),
            content,
        }
    }

    /// Placeholder for a file that could not be read
    pub fn fallback(path: &Path) -> Self {
        let title = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        Self {
            metadata: Metadata {
                title,
                ..Metadata::default()
            },
            slug: slug_for(path),
            content: String::new(),
        }
    }

    /// Post title
    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    /// Publication time in epoch milliseconds, 0 when `publishedAt` is not a valid date
    pub fn sort_key(&self) -> i64 {
        timestamp_millis(&self.metadata.published_at)
    }
}

/// Derive a slug from a file path: the file name without its extension
pub fn slug_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}
