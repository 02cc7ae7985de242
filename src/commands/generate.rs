//! Generate the static page

use anyhow::Result;
use std::sync::Arc;

use crate::config::ContentMode;
use crate::content::AggregatedContent;
use crate::generator::Generator;
use crate::provider::ContentProvider;
use crate::Portfolio;

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Fetch content from the content service regardless of the configured mode
    pub remote: bool,
    /// Content service base URL, overriding the configured environment variable
    pub api_base: Option<String>,
}

/// Resolve content through a provider built from the site configuration
pub async fn resolve_content(
    site: &Portfolio,
    options: &GenerateOptions,
) -> Result<Arc<AggregatedContent>> {
    let mut config = site.config.clone();
    if options.remote {
        config.content.mode = ContentMode::Remote;
    }

    let provider = ContentProvider::from_config(
        &config,
        || site.load_static_content(),
        options.api_base.clone(),
    )?;
    let content = provider.resolve().await?;
    Ok(content)
}

/// Resolve content and write the page
pub async fn run(site: &Portfolio, options: &GenerateOptions) -> Result<()> {
    let start = std::time::Instant::now();

    let content = resolve_content(site, options).await?;
    Generator::new(site).generate(&content)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::sample_content;
    use crate::provider::ContentError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_generate_static_site() {
        let dir = TempDir::new().unwrap();
        let site = Portfolio::new(dir.path()).unwrap();

        run(&site, &GenerateOptions::default()).await.unwrap();
        assert!(site.public_dir.join("index.html").exists());
    }

    #[tokio::test]
    async fn test_static_content_resolution() {
        let dir = TempDir::new().unwrap();
        let site = Portfolio::new(dir.path()).unwrap();
        let content = resolve_content(&site, &GenerateOptions::default())
            .await
            .unwrap();
        assert_eq!(*content, sample_content());
    }

    #[tokio::test]
    async fn test_remote_without_base_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let mut site = Portfolio::new(dir.path()).unwrap();
        site.config.content.api_base_env = "PORTFOLIO_GENERATE_TEST_UNSET".to_string();

        let options = GenerateOptions {
            remote: true,
            api_base: None,
        };
        let err = run(&site, &options).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ContentError>(),
            Some(ContentError::Configuration(_))
        ));
        assert!(!site.public_dir.join("index.html").exists());
    }
}
