//! Content loader - loads posts from a flat posts directory

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use super::post::slug_for;
use super::Post;

/// File extensions treated as posts unless configured otherwise
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Failures while reading the posts directory.
///
/// These never escape [`load_posts`]: they are logged and replaced by an
/// empty listing or a placeholder post.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to list {path:?}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// List post files directly inside `dir`, in directory order.
///
/// A missing directory is an empty listing. Only names whose extension
/// matches one of `extensions` (case-insensitively) are kept.
pub fn list_post_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.exists() {
        tracing::debug!("Posts directory {:?} does not exist", dir);
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| LoadError::ListDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = entry.path();
        if has_post_extension(path, extensions) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Load a single post from a file
pub fn read_post(path: &Path) -> Result<Post, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = String::from_utf8_lossy(&bytes);

    Ok(Post::from_source(slug_for(path), &raw))
}

/// Load every post in `dir`, in directory order.
///
/// Never fails: a listing error yields no posts, and an unreadable file
/// yields a placeholder post titled after the file name.
pub fn load_posts(dir: &Path, extensions: &[String]) -> Vec<Post> {
    let files = match list_post_files(dir, extensions) {
        Ok(files) => files,
        Err(e) => {
            tracing::error!("{}", e);
            return Vec::new();
        }
    };

    files
        .iter()
        .map(|path| {
            read_post(path).unwrap_or_else(|e| {
                tracing::warn!("{}, using placeholder post", e);
                Post::fallback(path)
            })
        })
        .collect()
}

/// Check if a file name carries one of the post extensions
fn has_post_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            extensions
                .iter()
                .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(e))
        })
        .unwrap_or(false)
}
