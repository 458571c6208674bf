//! List blog posts

use anyhow::Result;

use crate::helpers::format_date;
use crate::Blog;

/// List posts, newest first, as text lines or JSON
pub fn run(blog: &Blog, json: bool) -> Result<()> {
    let posts = blog.posts();

    if json {
        println!("{}", serde_json::to_string_pretty(posts)?);
        return Ok(());
    }

    println!("Posts ({}):", posts.len());
    for post in posts {
        println!(
            "  {} - {} [{}]",
            format_date(&post.metadata.published_at, true),
            post.metadata.title,
            post.slug
        );
    }

    Ok(())
}
