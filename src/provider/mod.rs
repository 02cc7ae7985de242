//! Content provider - resolves page content from a static record or the
//! remote content service, and publishes the resolution state

mod remote;

pub use remote::{BaseLocation, RemoteSource, Resource};

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

use crate::config::{ContentMode, SiteConfig};
use crate::content::{AggregatedContent, SchemaError};

/// Message shown to readers for any resolution failure
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load portfolio content. Please try again.";

/// Why a resolution failed. Readers only ever see [`LOAD_FAILED_MESSAGE`].
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("failed to fetch {resource}: {message}")]
    Transport { resource: Resource, message: String },

    #[error("malformed {resource} response: {message}")]
    Envelope { resource: Resource, message: String },

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ContentError {
    fn transport(resource: Resource, err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else {
            err.to_string()
        };
        ContentError::Transport { resource, message }
    }
}

/// Observable resolution state
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveState {
    Loading,
    Ready(Arc<AggregatedContent>),
    Error(String),
}

impl ResolveState {
    pub fn is_ready(&self) -> bool {
        matches!(self, ResolveState::Ready(_))
    }

    pub fn content(&self) -> Option<&Arc<AggregatedContent>> {
        match self {
            ResolveState::Ready(content) => Some(content),
            _ => None,
        }
    }
}

pub enum ContentSource {
    Static(Arc<AggregatedContent>),
    Remote(RemoteSource),
}

/// Resolves content and owns the only writable handle on its state
pub struct ContentProvider {
    source: ContentSource,
    state: watch::Sender<ResolveState>,
}

impl ContentProvider {
    pub fn new(source: ContentSource) -> Self {
        let (state, _) = watch::channel(ResolveState::Loading);
        Self { source, state }
    }

    pub fn from_static(content: AggregatedContent) -> Self {
        Self::new(ContentSource::Static(Arc::new(content)))
    }

    pub fn from_remote(remote: RemoteSource) -> Self {
        Self::new(ContentSource::Remote(remote))
    }

    /// Build a provider for the configured content mode.
    ///
    /// `static_content` is only used in static mode; `api_base` overrides the
    /// configured environment variable in remote mode.
    pub fn from_config(
        config: &SiteConfig,
        static_content: impl FnOnce() -> anyhow::Result<AggregatedContent>,
        api_base: Option<String>,
    ) -> anyhow::Result<Self> {
        let provider = match config.content.mode {
            ContentMode::Static => Self::from_static(static_content()?),
            ContentMode::Remote => {
                let base = match api_base {
                    Some(url) => BaseLocation::Fixed(url),
                    None => BaseLocation::Env(config.content.api_base_env.clone()),
                };
                Self::from_remote(RemoteSource::new(base, config.content.timeout()))
            }
        };
        Ok(provider)
    }

    /// Current state
    pub fn state(&self) -> ResolveState {
        self.state.borrow().clone()
    }

    /// Watch state transitions
    pub fn subscribe(&self) -> watch::Receiver<ResolveState> {
        self.state.subscribe()
    }

    /// Resolve a static source without suspending
    pub fn resolve_static(&self) -> Result<Arc<AggregatedContent>, ContentError> {
        match &self.source {
            ContentSource::Static(content) => {
                self.state.send_replace(ResolveState::Ready(content.clone()));
                Ok(content.clone())
            }
            ContentSource::Remote(_) => Err(ContentError::Configuration(
                "provider is configured for remote content".to_string(),
            )),
        }
    }

    /// Resolve content, moving the state from `Loading` to `Ready` or `Error`
    pub async fn resolve(&self) -> Result<Arc<AggregatedContent>, ContentError> {
        self.state.send_replace(ResolveState::Loading);

        let result = match &self.source {
            ContentSource::Static(content) => Ok(content.clone()),
            ContentSource::Remote(remote) => remote.fetch_all().await.map(Arc::new),
        };

        match &result {
            Ok(content) => {
                tracing::info!(
                    "Content ready: {} experience entries, {} testimonials",
                    content.experience.len(),
                    content.testimonials.len()
                );
                self.state.send_replace(ResolveState::Ready(content.clone()));
            }
            Err(e) => {
                tracing::error!("Content resolution failed: {}", e);
                self.state
                    .send_replace(ResolveState::Error(LOAD_FAILED_MESSAGE.to_string()));
            }
        }

        result
    }

    /// Run the whole resolution again, e.g. after an error
    pub async fn restart(&self) -> Result<Arc<AggregatedContent>, ContentError> {
        tracing::info!("Restarting content resolution");
        self.resolve().await
    }
}
