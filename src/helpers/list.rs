//! Post list view

use std::cmp::Reverse;

use super::date::format_date;
use super::html::{html_escape, time_tag};
use crate::config::BlogConfig;
use crate::content::Post;

/// Render the blog index: one linked entry per post, newest first.
///
/// Each entry shows the publication date, the title and, when present,
/// the summary, and links to the post by slug.
pub fn post_list(config: &BlogConfig, posts: &[Post]) -> String {
    let mut sorted: Vec<&Post> = posts.iter().collect();
    sorted.sort_by_cached_key(|post| Reverse(post.sort_key()));

    let mut html = r#"<div class="post-list">"#.to_string();

    for post in sorted {
        let title = html_escape(&post.metadata.title);
        let published_at = &post.metadata.published_at;

        html.push_str(&format!(
            r#"<a class="post-list-item" href="{}" aria-label="Read {}">"#,
            html_escape(&config.post_url(&post.slug)),
            title
        ));
        html.push_str(r#"<article class="post-list-entry">"#);
        html.push_str(&time_tag(
            published_at,
            &format_date(published_at, false),
            Some("post-list-date"),
        ));
        html.push_str(r#"<div class="post-list-body">"#);
        html.push_str(&format!(r#"<h3 class="post-list-title">{}</h3>"#, title));

        if !post.metadata.summary.is_empty() {
            html.push_str(&format!(
                r#"<p class="post-list-summary">{}</p>"#,
                html_escape(&post.metadata.summary)
            ));
        }

        html.push_str("</div></article></a>");
    }

    html.push_str("</div>");
    html
}
