//! Contact section with the enquiry form

use crate::config::ContactConfig;
use crate::contact::InquiryType;
use crate::helpers::{html_escape, link_to};

fn contact_details(config: &ContactConfig) -> Vec<String> {
    let mut items = Vec::new();

    if let Some(email) = &config.email {
        items.push(("Email", link_to(&format!("mailto:{}", email), email)));
    }
    if let Some(phone) = &config.phone {
        let digits: String = phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        items.push(("Phone", link_to(&format!("tel:{}", digits), phone)));
    }
    if let Some(location) = &config.location {
        items.push(("Location", html_escape(location)));
    }
    if let Some(linkedin) = &config.linkedin {
        let href = if linkedin.starts_with("http") {
            linkedin.clone()
        } else {
            format!("https://{}", linkedin)
        };
        items.push(("LinkedIn", link_to(&href, linkedin)));
    }

    items
        .into_iter()
        .map(|(label, value)| format!("<li><span>{}</span> {}</li>", label, value))
        .collect()
}

pub fn contact(config: &ContactConfig) -> String {
    let options: Vec<String> = InquiryType::ALL
        .iter()
        .map(|t| format!(r#"<option value="{0}">{0}</option>"#, html_escape(t.label())))
        .collect();

    format!(
        r#"<section id="contact" class="contact">
<h2>Let's Connect</h2>
<form method="post" action="/api/contact" class="contact-form">
<label>Your Name <input name="name" minlength="2" maxlength="100" required></label>
<label>Email Address <input type="email" name="email" required></label>
<label>Inquiry Type <select name="inquiryType" required><option value="">Select inquiry type</option>{options}</select></label>
<label>Subject <input name="subject" minlength="5" maxlength="200" required></label>
<label>Message <textarea name="message" minlength="10" maxlength="2000" required></textarea></label>
<button type="submit">Send Message</button>
</form>
<ul class="contact-details">{details}</ul>
</section>"#,
        options = options.join(""),
        details = contact_details(config).join(""),
    )
}
