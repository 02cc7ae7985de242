//! Content module - the portfolio content schema and its sources

pub mod loader;
mod sample;
mod schema;

pub use sample::sample_content;
pub use schema::{
    parse, parse_experience, parse_expertise, parse_profile, parse_testimonials,
    AggregatedContent, EntryId, ExperienceEntry, ExpertiseProfile, Metric, Profile, SchemaError,
    Testimonial,
};
