//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate a <time> HTML element
///
/// # Examples
/// ```ignore
/// time_tag("2024-01-15", "January 15, 2024", None)
/// // -> <time datetime="2024-01-15">January 15, 2024</time>
/// ```
pub fn time_tag(datetime: &str, display: &str, class: Option<&str>) -> String {
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, html_escape(c)))
        .unwrap_or_default();
    format!(
        r#"<time datetime="{}"{}>{}</time>"#,
        html_escape(datetime),
        class_attr,
        html_escape(display)
    )
}
