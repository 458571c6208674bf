//! Show a single post

use anyhow::{Context, Result};

use crate::helpers::format_date;
use crate::Blog;

/// Print one post's metadata and body
pub fn run(blog: &Blog, slug: &str, json: bool) -> Result<()> {
    let post = blog
        .post(slug)
        .with_context(|| format!("No post with slug {:?} in {:?}", slug, blog.posts_dir()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(post)?);
        return Ok(());
    }

    let metadata = &post.metadata;
    println!("{}", metadata.title);
    println!("{}", format_date(&metadata.published_at, true));
    if !metadata.summary.is_empty() {
        println!("{}", metadata.summary);
    }
    if let Some(image) = &metadata.image {
        println!("image: {}", image);
    }
    for (key, value) in &metadata.extra {
        println!("{}: {}", key, value);
    }
    println!();
    println!("{}", post.content);

    Ok(())
}
