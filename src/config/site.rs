//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub url: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,

    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),
            url: "http://example.com".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),

            content: ContentConfig::default(),
            contact: ContactConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Configured author, or `fallback` when none is set
    pub fn author_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.author.trim().is_empty() {
            fallback
        } else {
            &self.author
        }
    }
}

/// Where page content comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    #[default]
    Static,
    Remote,
}

/// Content source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub mode: ContentMode,
    /// Content file, relative to the source directory
    pub file: String,
    /// Environment variable holding the content service base URL
    pub api_base_env: String,
    pub timeout_secs: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            mode: ContentMode::Static,
            file: "content.yml".to_string(),
            api_base_env: "PORTFOLIO_API_BASE".to_string(),
            timeout_secs: 10,
        }
    }
}

impl ContentConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Contact section details and submission limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub rate_limit_max: usize,
    pub rate_limit_window_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: None,
            phone: None,
            location: None,
            linkedin: None,
            rate_limit_max: 3,
            rate_limit_window_secs: 3600,
        }
    }
}

impl ContactConfig {
    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_secs)
    }
}

/// Server defaults, overridable from the command line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Portfolio");
        assert_eq!(config.content.mode, ContentMode::Static);
        assert_eq!(config.content.api_base_env, "PORTFOLIO_API_BASE");
        assert_eq!(config.contact.rate_limit_max, 3);
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Portfolio
author: Test User
content:
  mode: remote
  timeout_secs: 3
contact:
  email: me@example.com
server:
  port: 8001
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Portfolio");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.content.mode, ContentMode::Remote);
        assert_eq!(config.content.timeout(), Duration::from_secs(3));
        assert_eq!(config.content.file, "content.yml");
        assert_eq!(config.contact.email.as_deref(), Some("me@example.com"));
        assert_eq!(config.contact.rate_limit_window_secs, 3600);
        assert_eq!(config.server.port, 8001);
        assert_eq!(config.server.ip, "localhost");
    }
}
