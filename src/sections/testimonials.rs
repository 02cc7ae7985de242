//! Testimonials

use crate::content::Testimonial;
use crate::helpers::{html_escape, image_tag};

/// Avatar fallback: the first letter of up to two words, upper-cased
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

fn avatar(testimonial: &Testimonial) -> String {
    match &testimonial.avatar {
        Some(src) => image_tag(src, &testimonial.name, Some("avatar")),
        None => format!(
            r#"<span class="avatar avatar-fallback">{}</span>"#,
            html_escape(&initials(&testimonial.name))
        ),
    }
}

pub fn testimonials(items: &[Testimonial]) -> String {
    let cards: Vec<String> = items
        .iter()
        .map(|t| {
            format!(
                r#"<figure class="testimonial">
{avatar}
<figcaption><strong>{name}</strong> <span>{title}</span></figcaption>
<blockquote>&ldquo;{content}&rdquo;</blockquote>
</figure>"#,
                avatar = avatar(t),
                name = html_escape(&t.name),
                title = html_escape(&t.title),
                content = html_escape(&t.content),
            )
        })
        .collect();

    format!(
        r#"<section id="testimonials" class="testimonials">
<h2>What Leaders Say</h2>
{}
</section>"#,
        cards.join("\n")
    )
}
