//! Remote content source - four concurrent fetches merged into one record

use reqwest::Client;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

use super::ContentError;
use crate::content::{
    parse_experience, parse_expertise, parse_profile, parse_testimonials, AggregatedContent,
    ExperienceEntry, ExpertiseProfile, Profile, SchemaError, Testimonial,
};

/// One of the four resources exposed by the content service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Profile,
    Experience,
    Testimonials,
    Expertise,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Profile,
        Resource::Experience,
        Resource::Testimonials,
        Resource::Expertise,
    ];

    /// Request path, relative to the service base
    pub fn path(self) -> &'static str {
        match self {
            Resource::Profile => "/api/profile",
            Resource::Experience => "/api/experience",
            Resource::Testimonials => "/api/testimonials",
            Resource::Expertise => "/api/expertise",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Resource::Profile => "profile",
            Resource::Experience => "experience",
            Resource::Testimonials => "testimonials",
            Resource::Expertise => "expertise",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the content service lives.
///
/// `Env` is read on every resolution, so a missing variable surfaces as a
/// configuration error at the first fetch rather than at startup.
#[derive(Debug, Clone)]
pub enum BaseLocation {
    Fixed(String),
    Env(String),
}

impl BaseLocation {
    pub fn resolve(&self) -> Result<String, ContentError> {
        let base = match self {
            BaseLocation::Fixed(url) => url.clone(),
            BaseLocation::Env(var) => std::env::var(var).map_err(|_| {
                ContentError::Configuration(format!("environment variable {} is not set", var))
            })?,
        };

        let base = base.trim().trim_end_matches('/').to_string();
        if base.is_empty() {
            return Err(ContentError::Configuration(
                "content service base URL is empty".to_string(),
            ));
        }
        Ok(base)
    }
}

/// HTTP client for the content service
#[derive(Debug, Clone)]
pub struct RemoteSource {
    base: BaseLocation,
    client: Client,
    timeout: Duration,
}

impl RemoteSource {
    pub fn new(base: BaseLocation, timeout: Duration) -> Self {
        Self {
            base,
            client: Client::new(),
            timeout,
        }
    }

    /// Fetch all four resources concurrently and merge them.
    ///
    /// The first failure aborts the join; nothing fetched so far is kept.
    pub async fn fetch_all(&self) -> Result<AggregatedContent, ContentError> {
        let base = self.base.resolve()?;
        tracing::debug!("Resolving content from {}", base);

        let (profile, experience, testimonials, expertise) = tokio::try_join!(
            self.fetch_profile(&base),
            self.fetch_experience(&base),
            self.fetch_testimonials(&base),
            self.fetch_expertise(&base),
        )?;

        let content = AggregatedContent {
            profile,
            experience,
            testimonials,
            expertise,
        };
        content.validate()?;
        Ok(content)
    }

    async fn fetch_profile(&self, base: &str) -> Result<Profile, ContentError> {
        let data = self.fetch_data(base, Resource::Profile).await?;
        let personal = match data {
            Value::Object(mut map) => map.remove("personal"),
            _ => None,
        }
        .ok_or_else(|| SchemaError::new("profile.personal", "missing field"))?;
        Ok(parse_profile(personal)?)
    }

    async fn fetch_experience(&self, base: &str) -> Result<Vec<ExperienceEntry>, ContentError> {
        let data = self.fetch_data(base, Resource::Experience).await?;
        Ok(parse_experience(data)?)
    }

    async fn fetch_testimonials(&self, base: &str) -> Result<Vec<Testimonial>, ContentError> {
        let data = self.fetch_data(base, Resource::Testimonials).await?;
        Ok(parse_testimonials(data)?)
    }

    async fn fetch_expertise(&self, base: &str) -> Result<ExpertiseProfile, ContentError> {
        let data = self.fetch_data(base, Resource::Expertise).await?;
        Ok(parse_expertise(data)?)
    }

    /// GET one resource and unwrap its `{data: ...}` envelope
    async fn fetch_data(&self, base: &str, resource: Resource) -> Result<Value, ContentError> {
        let url = format!("{}{}", base, resource.path());
        tracing::debug!("Fetching {} from {}", resource, url);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ContentError::transport(resource, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Transport {
                resource,
                message: format!("server returned {}", status),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ContentError::transport(resource, e))?;
        let body: Value = serde_json::from_slice(&body).map_err(|e| ContentError::Envelope {
            resource,
            message: format!("body is not JSON: {}", e),
        })?;

        tracing::debug!("Fetched {}", resource);
        unwrap_envelope(resource, body)
    }
}

fn unwrap_envelope(resource: Resource, body: Value) -> Result<Value, ContentError> {
    match body {
        Value::Object(mut map) => map.remove("data").ok_or_else(|| ContentError::Envelope {
            resource,
            message: "missing `data` field".to_string(),
        }),
        _ => Err(ContentError::Envelope {
            resource,
            message: "expected a JSON object".to_string(),
        }),
    }
}
