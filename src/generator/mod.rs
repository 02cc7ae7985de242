//! Generator module - writes the rendered page and its assets to the public directory

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::content::AggregatedContent;
use crate::sections::render_page;
use crate::Portfolio;

/// File holding the merged content next to the page
pub const CONTENT_JSON: &str = "content.json";

/// Static page generator
pub struct Generator {
    site: Portfolio,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Portfolio) -> Self {
        Self { site: site.clone() }
    }

    /// Generate the page for already-resolved content
    pub fn generate(&self, content: &AggregatedContent) -> Result<PathBuf> {
        fs::create_dir_all(&self.site.public_dir)?;

        // Copy source assets (images, etc.)
        let copied = self.copy_source_assets()?;
        tracing::debug!("Copied {} source assets", copied);

        let index_path = self.site.public_dir.join("index.html");
        fs::write(&index_path, render_page(&self.site.config, content))?;

        let json_path = self.site.public_dir.join(CONTENT_JSON);
        fs::write(&json_path, serde_json::to_string_pretty(content)?)?;

        tracing::info!("Wrote {:?}", index_path);
        Ok(index_path)
    }

    /// Copy everything under the source directory except the content file
    fn copy_source_assets(&self) -> Result<usize> {
        let source_dir = &self.site.source_dir;
        if !source_dir.exists() {
            return Ok(0);
        }

        let content_file = source_dir.join(&self.site.config.content.file);
        let mut copied = 0;

        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || path == content_file {
                continue;
            }

            // Skip hidden files such as editor swap files
            if path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with('.'))
                .unwrap_or(false)
            {
                continue;
            }

            let relative = path.strip_prefix(source_dir)?;
            let dest = self.site.public_dir.join(relative);

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }

            fs::copy(path, &dest)?;
            copied += 1;
        }

        Ok(copied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::sample_content;
    use tempfile::TempDir;

    #[test]
    fn test_generate_writes_page_and_assets() {
        let dir = TempDir::new().unwrap();
        let site = Portfolio::new(dir.path()).unwrap();
        fs::create_dir_all(site.source_dir.join("images")).unwrap();
        fs::write(site.source_dir.join("images/me.jpg"), b"jpeg").unwrap();
        fs::write(site.source_dir.join("content.yml"), "ignored: true").unwrap();
        fs::write(site.source_dir.join(".swp"), "x").unwrap();

        let content = sample_content();
        let index = Generator::new(&site).generate(&content).unwrap();

        let html = fs::read_to_string(index).unwrap();
        assert!(html.contains(r#"<section id="hero""#));
        assert!(site.public_dir.join("images/me.jpg").exists());
        assert!(!site.public_dir.join("content.yml").exists());
        assert!(!site.public_dir.join(".swp").exists());

        let json = fs::read_to_string(site.public_dir.join(CONTENT_JSON)).unwrap();
        let written: AggregatedContent = serde_json::from_str(&json).unwrap();
        assert_eq!(written, content);
    }
}
