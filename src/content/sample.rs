//! Built-in sample content, used when a site has no content file

use super::schema::{
    AggregatedContent, EntryId, ExperienceEntry, ExpertiseProfile, Metric, Profile, Testimonial,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The sample portfolio shipped with the binary
pub fn sample_content() -> AggregatedContent {
    AggregatedContent {
        profile: Profile {
            name: "Jordan Avery".to_string(),
            title: "Managing Director & Head of Cultivation".to_string(),
            company: "Northfield Truffle Company".to_string(),
            location: "San Francisco, California, United States".to_string(),
            summary: "Business leader in technology, specialty agriculture and trade. \
                      General management experience with an engineering background, \
                      working across four languages and three continents."
                .to_string(),
            specialties: strings(&[
                "Market Strategies",
                "Product Marketing",
                "Business Development",
                "Pricing",
                "Distribution",
                "Alliance/Partnerships",
                "Contract Negotiations",
                "Cross-cultural Teams",
                "Team Leadership",
                "Branding",
            ]),
            languages: strings(&["English", "German", "Mandarin Chinese", "Japanese"]),
        },
        experience: vec![
            ExperienceEntry {
                id: EntryId::Number(1),
                company: "Northfield Truffle Company".to_string(),
                position: "Managing Director & Head of Cultivation".to_string(),
                duration: "December 2007 - Present".to_string(),
                location: Some("San Francisco, California".to_string()),
                description: "Founded and led a truffle cultivation company, developing \
                              scientific methods to grow European truffles sustainably."
                    .to_string(),
                achievements: strings(&[
                    "Established a commercial truffle orchard program",
                    "Built a distribution network for fresh truffles",
                    "Reached profitability within three years",
                ]),
            },
            ExperienceEntry {
                id: EntryId::Number(2),
                company: "Relay Mobile, Inc.".to_string(),
                position: "VP of Marketing; CEO".to_string(),
                duration: "2010 - 2013".to_string(),
                location: Some("Silicon Valley, California".to_string()),
                description: "Led marketing strategy and later served as CEO for a mobile \
                              technology startup."
                    .to_string(),
                achievements: strings(&[
                    "Grew the user base fourfold in the first year",
                    "Closed a Series A round",
                ]),
            },
            ExperienceEntry {
                id: EntryId::Number(3),
                company: "Meridian Consulting".to_string(),
                position: "Founder".to_string(),
                duration: "2005 - 2007".to_string(),
                location: None,
                description: "Advised technology companies on international market entry."
                    .to_string(),
                achievements: Vec::new(),
            },
        ],
        testimonials: vec![
            Testimonial {
                id: EntryId::Number(1),
                name: "Sarah Whitfield".to_string(),
                title: "Former CEO, TechVentures".to_string(),
                content: "A rare combination of technical depth and business sense. \
                          Invaluable during our global expansion."
                    .to_string(),
                avatar: Some("/images/avatars/sarah.jpg".to_string()),
            },
            Testimonial {
                id: EntryId::Number(2),
                name: "Dr. Marcus Lee".to_string(),
                title: "Research Director, Agricultural Sciences".to_string(),
                content: "Scientific rigor paired with a clear commercial vision.".to_string(),
                avatar: None,
            },
        ],
        expertise: ExpertiseProfile {
            title: "Truffle Cultivation Innovation".to_string(),
            subtitle: "A scientific approach to European truffle cultivation".to_string(),
            description: "Combining agricultural science with sustainable practices to \
                          cultivate truffles in North America."
                .to_string(),
            metrics: vec![
                Metric {
                    label: "Years of Research".to_string(),
                    value: "17+".to_string(),
                },
                Metric {
                    label: "Truffle Varieties".to_string(),
                    value: "8".to_string(),
                },
                Metric {
                    label: "Global Partners".to_string(),
                    value: "50+".to_string(),
                },
                Metric {
                    label: "Harvest Success Rate".to_string(),
                    value: "95%".to_string(),
                },
            ],
            achievements: strings(&[
                "Soil microbiome optimization techniques",
                "Sustainable harvesting methods",
                "Delivery of fresh truffles within 48 hours",
            ]),
        },
    }
}
