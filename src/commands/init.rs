//! Initialize a new portfolio site

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

use crate::content::sample_content;

const CONFIG_TEMPLATE: &str = r#"# Portfolio configuration

# Site
title: Portfolio
description: ''
author: John Doe
language: en
url: http://example.com

# Directory
source_dir: source
public_dir: public

# Content
content:
  # static: read source/<file>; remote: fetch from the content service
  mode: static
  file: content.yml
  api_base_env: PORTFOLIO_API_BASE
  timeout_secs: 10

# Contact section
contact:
  email:
  phone:
  location:
  linkedin:
  rate_limit_max: 3
  rate_limit_window_secs: 3600

# Server
server:
  ip: localhost
  port: 4000
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        bail!("{:?} already contains a site", target_dir);
    }

    fs::create_dir_all(target_dir.join("source/images"))?;
    fs::write(&config_path, CONFIG_TEMPLATE)?;

    let content = serde_yaml::to_string(&sample_content())?;
    fs::write(target_dir.join("source/content.yml"), content)?;

    Ok(())
}
