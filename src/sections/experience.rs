//! Experience timeline

use crate::content::ExperienceEntry;
use crate::helpers::html_escape;

/// The first entry is the current position, the rest are former ones
pub fn tenure_label(index: usize) -> &'static str {
    if index == 0 {
        "Current"
    } else {
        "Former"
    }
}

fn anchor(entry: &ExperienceEntry) -> String {
    format!("experience-{}-{}", slug::slugify(&entry.company), entry.id)
}

fn card(index: usize, entry: &ExperienceEntry) -> String {
    let location = entry
        .location
        .as_ref()
        .map(|l| format!(r#" <span class="location">{}</span>"#, html_escape(l)))
        .unwrap_or_default();

    let achievements = if entry.achievements.is_empty() {
        String::new()
    } else {
        let items: Vec<String> = entry
            .achievements
            .iter()
            .map(|a| format!("<li>{}</li>", html_escape(a)))
            .collect();
        format!(
            "<h4>Key Achievements:</h4>\n<ul class=\"achievements\">{}</ul>",
            items.join("")
        )
    };

    format!(
        r#"<article class="experience-card" id="{anchor}">
<span class="badge">{tenure}</span>
<h3>{position}</h3>
<p class="company">{company}</p>
<p class="period"><span class="duration">{duration}</span>{location}</p>
<p>{description}</p>
{achievements}
</article>"#,
        anchor = html_escape(&anchor(entry)),
        tenure = tenure_label(index),
        position = html_escape(&entry.position),
        company = html_escape(&entry.company),
        duration = html_escape(&entry.duration),
        location = location,
        description = html_escape(&entry.description),
        achievements = achievements,
    )
}

pub fn experience(entries: &[ExperienceEntry]) -> String {
    let cards: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| card(i, entry))
        .collect();

    format!(
        r#"<section id="experience" class="experience">
<h2>Professional Experience</h2>
<div class="timeline">
{}
</div>
</section>"#,
        cards.join("\n")
    )
}
