//! Render the post list view

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::Blog;

/// Write the post list HTML to `output`, or stdout when not given
pub fn run(blog: &Blog, output: Option<&Path>) -> Result<()> {
    let html = blog.render_index();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, html).with_context(|| format!("Failed to write {:?}", path))?;
            tracing::info!("Wrote {} posts to {:?}", blog.posts().len(), path);
        }
        None => println!("{}", html),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let posts_dir = dir.path().join("app/blog/posts");
        fs::create_dir_all(&posts_dir).unwrap();
        fs::write(posts_dir.join("hi.md"), "---\ntitle: Hi\n---\n").unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        let output = dir.path().join("public").join("index.html");
        run(&blog, Some(&output)).unwrap();

        let html = fs::read_to_string(output).unwrap();
        assert!(html.contains("<h3 class=\"post-list-title\">Hi</h3>"));
    }
}
