//! HTML helper functions

use crate::config::SiteConfig;

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}

/// Generate an anchor tag; absolute URLs open in a new tab
///
/// # Examples
/// ```ignore
/// link_to("https://example.com", "Site") // -> <a href="https://example.com" target="_blank" rel="noopener">Site</a>
/// ```
pub fn link_to(href: &str, text: &str) -> String {
    if is_external(href) {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
            html_escape(href),
            html_escape(text)
        )
    } else {
        format!(r#"<a href="{}">{}</a>"#, html_escape(href), html_escape(text))
    }
}

/// Generate an image tag
pub fn image_tag(src: &str, alt: &str, class: Option<&str>) -> String {
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, html_escape(c)))
        .unwrap_or_default();

    format!(
        r#"<img src="{}" alt="{}"{} loading="lazy">"#,
        html_escape(src),
        html_escape(alt),
        class_attr
    )
}

/// Generate Open Graph meta tags
pub fn open_graph(config: &SiteConfig, title: &str, description: &str) -> String {
    let mut tags = vec![
        r#"<meta property="og:type" content="website">"#.to_string(),
        format!(
            r#"<meta property="og:title" content="{}">"#,
            html_escape(title)
        ),
        format!(
            r#"<meta property="og:url" content="{}">"#,
            html_escape(&config.url)
        ),
        format!(
            r#"<meta property="og:site_name" content="{}">"#,
            html_escape(&config.title)
        ),
    ];

    if !description.is_empty() {
        tags.push(format!(
            r#"<meta property="og:description" content="{}">"#,
            html_escape(description)
        ));
    }

    tags.join("\n")
}

/// Generate meta generator tag
pub fn meta_generator() -> String {
    format!(
        r#"<meta name="generator" content="portfolio-rs {}">"#,
        env!("CARGO_PKG_VERSION")
    )
}
