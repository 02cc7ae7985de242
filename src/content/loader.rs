//! Content loader - reads the static content record from the source directory

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::{parse, sample_content, AggregatedContent};
use crate::Portfolio;

/// Loads static content for a site
pub struct ContentLoader<'a> {
    site: &'a Portfolio,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Portfolio) -> Self {
        Self { site }
    }

    /// Path of the content file, whether or not it exists
    pub fn content_path(&self) -> PathBuf {
        self.site.source_dir.join(&self.site.config.content.file)
    }

    /// Load the content file, falling back to the built-in sample content
    pub fn load(&self) -> Result<AggregatedContent> {
        let path = self.content_path();
        if !path.exists() {
            tracing::debug!("No content file at {:?}, using sample content", path);
            return Ok(sample_content());
        }

        let content = load_file(&path)?;
        tracing::info!(
            "Loaded content from {:?}: {} experience entries, {} testimonials",
            path,
            content.experience.len(),
            content.testimonials.len()
        );
        Ok(content)
    }
}

/// Read and validate a YAML or JSON content record
pub fn load_file(path: &Path) -> Result<AggregatedContent> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;

    let value: Value = if is_json_file(path) {
        serde_json::from_str(&raw).with_context(|| format!("parsing {:?}", path))?
    } else {
        serde_yaml::from_str(&raw).with_context(|| format!("parsing {:?}", path))?
    };

    let content = parse(value).with_context(|| format!("invalid content in {:?}", path))?;
    Ok(content)
}

fn is_json_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const YAML: &str = r#"
profile:
  name: Test Person
  title: Engineer
  company: Acme
  location: Berlin
  summary: Builds things.
  languages: [English, German]
experience:
  - id: 1
    company: Acme
    position: Engineer
    duration: 2020 - Present
    description: Building.
    achievements: []
testimonials: []
expertise:
  title: Widgets
  subtitle: All about widgets
  description: Widgets, mostly.
  metrics:
    - label: Widgets
      value: "42"
"#;

    #[test]
    fn test_load_yaml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.yml");
        fs::write(&path, YAML).unwrap();

        let content = load_file(&path).unwrap();
        assert_eq!(content.profile.name, "Test Person");
        assert!(content.profile.specialties.is_empty());
        assert_eq!(content.experience.len(), 1);
        assert_eq!(content.expertise.metrics[0].value, "42");
    }

    #[test]
    fn test_load_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        let value: Value = serde_yaml::from_str(YAML).unwrap();
        fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();

        let content = load_file(&path).unwrap();
        assert_eq!(content.profile.company, "Acme");
    }

    #[test]
    fn test_invalid_file_reports_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.yml");
        fs::write(&path, YAML.replace("languages: [English, German]", "languages: []")).unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("profile.languages"));
    }

    #[test]
    fn test_missing_file_uses_sample() {
        let dir = TempDir::new().unwrap();
        let site = Portfolio::new(dir.path()).unwrap();
        let content = ContentLoader::new(&site).load().unwrap();
        assert_eq!(content, sample_content());
    }
}
