//! Skill configuration model.
//!
//! Loaded from `config.toml` by `greeter-infrastructure`; every section is
//! optional and falls back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::response::CardImage;
use crate::time_of_day::DEFAULT_UTC_OFFSET_HOURS;

pub const DEFAULT_FACT_URL: &str =
    "http://api.forismatic.com/api/1.0/json?method=getQuote&lang=en&format=json";
pub const DEFAULT_FACT_TIMEOUT_SECS: u64 = 10;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SkillConfig {
    /// Whole-hour offset of the greeting reference zone from UTC
    pub time_zone_offset_hours: i32,
    pub fact_source: FactSourceConfig,
    pub greeting: GreetingConfig,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            time_zone_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
            fact_source: FactSourceConfig::default(),
            greeting: GreetingConfig::default(),
        }
    }
}

impl SkillConfig {
    /// Checks values serde cannot constrain.
    pub fn validate(&self) -> crate::Result<()> {
        if !(-12..=14).contains(&self.time_zone_offset_hours) {
            return Err(crate::SkillError::config(format!(
                "time_zone_offset_hours must be within -12..=14, got {}",
                self.time_zone_offset_hours
            )));
        }
        if self.fact_source.timeout_secs == 0 {
            return Err(crate::SkillError::config(
                "fact_source.timeout_secs must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FactSourceConfig {
    pub url: String,
    pub timeout_secs: u64,
    /// When set, this text is served instead of calling the remote source
    pub offline_text: Option<String>,
}

impl Default for FactSourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FACT_URL.to_string(),
            timeout_secs: DEFAULT_FACT_TIMEOUT_SECS,
            offline_text: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GreetingConfig {
    /// Image shown on the greeting card. Upgrades the card to `Standard`.
    pub card_image: Option<CardImage>,
}
