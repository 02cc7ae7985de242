//! Hero section

use crate::content::Profile;
use crate::helpers::{html_escape, link_to};

pub fn hero(profile: &Profile) -> String {
    let languages: Vec<String> = profile
        .languages
        .iter()
        .map(|l| format!(r#"<span class="badge">{}</span>"#, html_escape(l)))
        .collect();

    let specialties = if profile.specialties.is_empty() {
        String::new()
    } else {
        let items: Vec<String> = profile
            .specialties
            .iter()
            .map(|s| format!("<li>{}</li>", html_escape(s)))
            .collect();
        format!(r#"<ul class="specialties">{}</ul>"#, items.join(""))
    };

    format!(
        r#"<section id="hero" class="hero">
<p class="location">{location}</p>
<h1>{name}</h1>
<p class="title">{title}</p>
<p class="company">{company}</p>
<p class="summary">{summary}</p>
<div class="languages"><span>Fluent in:</span> {languages}</div>
{specialties}
<div class="actions">{experience_link} {contact_link}</div>
</section>"#,
        location = html_escape(&profile.location),
        name = html_escape(&profile.name),
        title = html_escape(&profile.title),
        company = html_escape(&profile.company),
        summary = html_escape(&profile.summary),
        languages = languages.join(" "),
        specialties = specialties,
        experience_link = link_to("#experience", "View Experience"),
        contact_link = link_to("#contact", "Get In Touch"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::sample_content;

    #[test]
    fn test_hero_lists_languages_in_order() {
        let profile = sample_content().profile;
        let html = hero(&profile);

        let positions: Vec<usize> = profile
            .languages
            .iter()
            .map(|l| html.find(&html_escape(l)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_hero_omits_empty_specialties() {
        let mut profile = sample_content().profile;
        profile.specialties.clear();
        assert!(!hero(&profile).contains("specialties"));
    }
}
