//! Configuration service.
//!
//! Loads `SkillConfig` from `~/.config/greeter/config.toml` (or an explicit
//! path) and applies environment overrides on top. A missing file yields the
//! defaults; a file that exists but does not parse is an error.

use std::path::{Path, PathBuf};

use greeter_core::response::CardImage;
use greeter_core::{SkillConfig, SkillError};
use tracing::{debug, info};

use crate::paths::GreeterPaths;

pub const ENV_FACT_URL: &str = "GREETER_FACT_URL";
pub const ENV_FACT_TIMEOUT_SECS: &str = "GREETER_FACT_TIMEOUT_SECS";
pub const ENV_TZ_OFFSET_HOURS: &str = "GREETER_TZ_OFFSET_HOURS";
pub const ENV_CARD_IMAGE_SMALL: &str = "GREETER_CARD_IMAGE_SMALL";
pub const ENV_CARD_IMAGE_LARGE: &str = "GREETER_CARD_IMAGE_LARGE";

#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Uses the default configuration file location.
    pub fn new() -> Result<Self, SkillError> {
        let path = GreeterPaths::config_file().map_err(|e| SkillError::config(e.to_string()))?;
        Ok(Self { path })
    }

    /// Uses an explicit configuration file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the file, applies process environment overrides and validates.
    pub async fn load(&self) -> Result<SkillConfig, SkillError> {
        let config = self.load_file().await?;
        let config = apply_env_overrides(config, |key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file only. Missing file → defaults.
    pub async fn load_file(&self) -> Result<SkillConfig, SkillError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => {
                let config: SkillConfig = toml::from_str(&content)?;
                info!(path = %self.path.display(), "Loaded configuration");
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No configuration file, using defaults");
                Ok(SkillConfig::default())
            }
            Err(e) => Err(SkillError::config(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

/// Overlays environment values onto `config`.
///
/// `lookup` abstracts the environment so the overlay can be exercised
/// without touching process state.
pub fn apply_env_overrides<F>(mut config: SkillConfig, lookup: F) -> Result<SkillConfig, SkillError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_FACT_URL) {
        config.fact_source.url = url;
    }

    if let Some(raw) = lookup(ENV_FACT_TIMEOUT_SECS) {
        config.fact_source.timeout_secs = raw.trim().parse().map_err(|_| {
            SkillError::config(format!("{ENV_FACT_TIMEOUT_SECS} must be an integer, got '{raw}'"))
        })?;
    }

    if let Some(raw) = lookup(ENV_TZ_OFFSET_HOURS) {
        config.time_zone_offset_hours = raw.trim().parse().map_err(|_| {
            SkillError::config(format!("{ENV_TZ_OFFSET_HOURS} must be an integer, got '{raw}'"))
        })?;
    }

    match (lookup(ENV_CARD_IMAGE_SMALL), lookup(ENV_CARD_IMAGE_LARGE)) {
        (Some(small), Some(large)) => {
            config.greeting.card_image = Some(CardImage {
                small_image_url: small,
                large_image_url: large,
            });
        }
        (None, None) => {}
        _ => {
            return Err(SkillError::config(format!(
                "{ENV_CARD_IMAGE_SMALL} and {ENV_CARD_IMAGE_LARGE} must be set together"
            )));
        }
    }

    Ok(config)
}
