//! Page sections - pure functions from content to HTML
//!
//! Every section receives the slice of [`AggregatedContent`] it displays and
//! returns markup; nothing here performs I/O or mutates content.

mod contact;
mod experience;
mod expertise;
mod hero;
mod testimonials;

pub use contact::contact;
pub use experience::{experience, tenure_label};
pub use expertise::{expertise, metric_icon, Icon};
pub use hero::hero;
pub use testimonials::{initials, testimonials};

use crate::config::SiteConfig;
use crate::content::AggregatedContent;
use crate::helpers::{html_escape, link_to, meta_generator, open_graph};

const NAV: [(&str, &str); 5] = [
    ("#hero", "About"),
    ("#experience", "Experience"),
    ("#expertise", "Expertise"),
    ("#testimonials", "Testimonials"),
    ("#contact", "Contact"),
];

/// Site header with in-page navigation
pub fn header(config: &SiteConfig, content: &AggregatedContent) -> String {
    let brand = if content.profile.name.is_empty() {
        &config.title
    } else {
        &content.profile.name
    };
    let links: Vec<String> = NAV
        .iter()
        .map(|(href, text)| format!("<li>{}</li>", link_to(href, text)))
        .collect();

    format!(
        r##"<header class="site-header">
<a class="brand" href="#hero">{}</a>
<nav><ul>{}</ul></nav>
</header>"##,
        html_escape(brand),
        links.join("")
    )
}

pub fn footer(config: &SiteConfig, content: &AggregatedContent) -> String {
    format!(
        r#"<footer class="site-footer">
<p>{} &middot; {}</p>
<p>&copy; {}. All rights reserved.</p>
</footer>"#,
        html_escape(&content.profile.title),
        html_escape(&content.profile.company),
        html_escape(config.author_or(&content.profile.name))
    )
}

/// Render the full single-page document
pub fn render_page(config: &SiteConfig, content: &AggregatedContent) -> String {
    let title = format!("{} - {}", content.profile.name, content.profile.title);
    let description = if config.description.is_empty() {
        &content.profile.summary
    } else {
        &config.description
    };

    let body = [
        header(config, content),
        "<main>".to_string(),
        hero(&content.profile),
        experience(&content.experience),
        expertise(&content.expertise),
        testimonials(&content.testimonials),
        contact(&config.contact),
        "</main>".to_string(),
        footer(config, content),
    ]
    .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
{og}
{generator}
</head>
<body>
{body}
</body>
</html>
"#,
        lang = html_escape(&config.language),
        title = html_escape(&title),
        description = html_escape(description),
        og = open_graph(config, &title, description),
        generator = meta_generator(),
        body = body
    )
}
