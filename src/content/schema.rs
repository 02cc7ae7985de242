//! Content records and their validation

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// A payload that does not match the expected content shape
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct SchemaError {
    /// Dotted path of the offending field, e.g. `experience[2].id`
    pub field: String,
    pub message: String,
}

impl SchemaError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Identifier of an experience entry or testimonial.
///
/// Hand-written content tends to use integers while the content service
/// emits strings, so both are accepted and compared by their display form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Number(u64),
    Text(String),
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Number(n) => write!(f, "{}", n),
            EntryId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for EntryId {
    fn from(n: u64) -> Self {
        EntryId::Number(n)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        EntryId::Text(s.to_string())
    }
}

/// Treats `null`, a missing key and a blank string the same way
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Personal profile shown in the hero section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub summary: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub languages: Vec<String>,
}

impl Profile {
    fn validate(&self) -> Result<(), SchemaError> {
        if self.summary.trim().is_empty() {
            return Err(SchemaError::new("profile.summary", "must not be empty"));
        }
        if self.languages.is_empty() {
            return Err(SchemaError::new(
                "profile.languages",
                "must list at least one language",
            ));
        }
        Ok(())
    }
}

/// One position on the experience timeline.
///
/// Entries are kept in the order they were supplied; the first one is the
/// current position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub company: String,
    pub position: String,
    pub duration: String,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: EntryId,
    pub name: String,
    pub title: String,
    pub content: String,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

/// Domain expertise showcase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertiseProfile {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// Everything the page needs, assembled once per resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedContent {
    pub profile: Profile,
    pub experience: Vec<ExperienceEntry>,
    pub testimonials: Vec<Testimonial>,
    pub expertise: ExpertiseProfile,
}

impl AggregatedContent {
    /// Check the invariants serde cannot express
    pub fn validate(&self) -> Result<(), SchemaError> {
        self.profile.validate()?;
        check_unique_ids("experience", self.experience.iter().map(|e| &e.id))?;
        check_unique_ids("testimonials", self.testimonials.iter().map(|t| &t.id))?;
        Ok(())
    }
}

fn check_unique_ids<'a>(
    resource: &str,
    ids: impl Iterator<Item = &'a EntryId>,
) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for (index, id) in ids.enumerate() {
        if !seen.insert(id.to_string()) {
            return Err(SchemaError::new(
                format!("{}[{}].id", resource, index),
                format!("duplicate id \"{}\"", id),
            ));
        }
    }
    Ok(())
}

fn decode<T: serde::de::DeserializeOwned>(field: &str, value: Value) -> Result<T, SchemaError> {
    serde_json::from_value(value).map_err(|e| SchemaError::new(field, e.to_string()))
}

pub fn parse_profile(value: Value) -> Result<Profile, SchemaError> {
    let profile: Profile = decode("profile", value)?;
    profile.validate()?;
    Ok(profile)
}

pub fn parse_experience(value: Value) -> Result<Vec<ExperienceEntry>, SchemaError> {
    let entries: Vec<ExperienceEntry> = decode("experience", value)?;
    check_unique_ids("experience", entries.iter().map(|e| &e.id))?;
    Ok(entries)
}

pub fn parse_testimonials(value: Value) -> Result<Vec<Testimonial>, SchemaError> {
    let testimonials: Vec<Testimonial> = decode("testimonials", value)?;
    check_unique_ids("testimonials", testimonials.iter().map(|t| &t.id))?;
    Ok(testimonials)
}

pub fn parse_expertise(value: Value) -> Result<ExpertiseProfile, SchemaError> {
    decode("expertise", value)
}

/// Parse an untyped `{profile, experience, testimonials, expertise}` record.
///
/// `personal` is accepted in place of `profile`.
pub fn parse(value: Value) -> Result<AggregatedContent, SchemaError> {
    let mut record = match value {
        Value::Object(map) => map,
        other => {
            return Err(SchemaError::new(
                "content",
                format!("expected an object, found {}", kind_of(&other)),
            ))
        }
    };

    let mut take = |names: &[&str]| {
        names
            .iter()
            .find_map(|name| record.remove(*name))
            .ok_or_else(|| SchemaError::new(names[0], "missing field"))
    };

    let profile = take(&["profile", "personal"])?;
    let experience = take(&["experience"])?;
    let testimonials = take(&["testimonials"])?;
    let expertise = take(&["expertise"])?;

    Ok(AggregatedContent {
        profile: parse_profile(profile)?,
        experience: parse_experience(experience)?,
        testimonials: parse_testimonials(testimonials)?,
        expertise: parse_expertise(expertise)?,
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
