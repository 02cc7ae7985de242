//! Fetch content from the content service and print the merged record

use anyhow::Result;

use super::generate::{resolve_content, GenerateOptions};
use crate::Portfolio;

/// Resolve remote content and print it as JSON
pub async fn run(site: &Portfolio, api_base: Option<String>) -> Result<()> {
    let options = GenerateOptions {
        remote: true,
        api_base,
    };
    let content = resolve_content(site, &options).await?;
    println!("{}", serde_json::to_string_pretty(&*content)?);
    Ok(())
}
