use std::path::PathBuf;

use anyhow::{Context, Result};
use greeter_core::SkillConfig;
use greeter_infrastructure::ConfigService;

/// Loads configuration from `path`, or from the default location.
pub async fn load_config(path: Option<PathBuf>) -> Result<SkillConfig> {
    let service = match path {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new().context("Failed to resolve configuration path")?,
    };

    service
        .load()
        .await
        .with_context(|| format!("Failed to load configuration from {}", service.path().display()))
}
