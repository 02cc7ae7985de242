//! Expertise showcase

use crate::content::{ExpertiseProfile, Metric};
use crate::helpers::html_escape;

/// Icons available to metric cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Award,
    Microscope,
    Leaf,
    Globe,
    TrendingUp,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Award => "award",
            Icon::Microscope => "microscope",
            Icon::Leaf => "leaf",
            Icon::Globe => "globe",
            Icon::TrendingUp => "trending-up",
        }
    }
}

const METRIC_ICONS: [Icon; 4] = [Icon::Award, Icon::Microscope, Icon::Leaf, Icon::Globe];

/// Icon for the metric at `index`; positions past the fixed set share a default
pub fn metric_icon(index: usize) -> Icon {
    METRIC_ICONS.get(index).copied().unwrap_or(Icon::TrendingUp)
}

fn metric_card(index: usize, metric: &Metric) -> String {
    format!(
        r#"<div class="metric"><i class="icon icon-{}"></i><strong>{}</strong><span>{}</span></div>"#,
        metric_icon(index).name(),
        html_escape(&metric.value),
        html_escape(&metric.label)
    )
}

pub fn expertise(profile: &ExpertiseProfile) -> String {
    let metrics: Vec<String> = profile
        .metrics
        .iter()
        .enumerate()
        .map(|(i, m)| metric_card(i, m))
        .collect();
    let achievements: Vec<String> = profile
        .achievements
        .iter()
        .map(|a| format!("<li>{}</li>", html_escape(a)))
        .collect();

    format!(
        r#"<section id="expertise" class="expertise">
<h2>{title}</h2>
<p class="subtitle">{subtitle}</p>
<p>{description}</p>
<div class="metrics">{metrics}</div>
<h3>Scientific &amp; Business Achievements</h3>
<ul class="achievements">{achievements}</ul>
</section>"#,
        title = html_escape(&profile.title),
        subtitle = html_escape(&profile.subtitle),
        description = html_escape(&profile.description),
        metrics = metrics.join(""),
        achievements = achievements.join(""),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(n: usize) -> Metric {
        Metric {
            label: format!("Metric {}", n),
            value: n.to_string(),
        }
    }

    #[test]
    fn test_fixed_icons_then_default() {
        assert_eq!(metric_icon(0), Icon::Award);
        assert_eq!(metric_icon(3), Icon::Globe);
        assert_eq!(metric_icon(4), Icon::TrendingUp);
        assert_eq!(metric_icon(usize::MAX), Icon::TrendingUp);
    }

    #[test]
    fn test_fifth_metric_gets_default_icon() {
        let profile = ExpertiseProfile {
            title: "X".to_string(),
            subtitle: "Y".to_string(),
            description: "Z".to_string(),
            metrics: (0..5).map(metric).collect(),
            achievements: Vec::new(),
        };
        let html = expertise(&profile);

        assert_eq!(html.matches("class=\"metric\"").count(), 5);
        assert_eq!(html.matches("icon-trending-up").count(), 1);
        let last = html.rfind("icon-trending-up").unwrap();
        assert!(last > html.find("Metric 3").unwrap());
    }
}
