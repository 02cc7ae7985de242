//! portfolio-rs: a single-page portfolio site generator and content API
//!
//! Page content is resolved either from a static record or from a content
//! service exposing four resources, then rendered as one HTML page.

pub mod commands;
pub mod config;
pub mod contact;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod provider;
pub mod sections;
pub mod server;

use anyhow::Result;
use std::path::Path;

/// The main portfolio application
#[derive(Clone)]
pub struct Portfolio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Source directory
    pub source_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Portfolio {
    /// Create a new Portfolio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    pub fn with_config(base_dir: std::path::PathBuf, config: config::SiteConfig) -> Self {
        let source_dir = base_dir.join(&config.source_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            source_dir,
            public_dir,
        }
    }

    /// Path of `_config.yml`
    pub fn config_path(&self) -> std::path::PathBuf {
        self.base_dir.join("_config.yml")
    }

    /// Load the static content record (content file or built-in sample)
    pub fn load_static_content(&self) -> Result<content::AggregatedContent> {
        content::loader::ContentLoader::new(self).load()
    }

    /// Resolve content and generate the site
    pub async fn generate(&self, options: &commands::generate::GenerateOptions) -> Result<()> {
        commands::generate::run(self, options).await
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
