//! Fact provider implementations.

mod forismatic;
mod static_provider;

use std::sync::Arc;

use greeter_core::SkillConfig;
use greeter_core::fact::FactProvider;
use tracing::info;

pub use forismatic::{ForismaticFactProvider, parse_quote};
pub use static_provider::StaticFactProvider;

/// Picks the provider the configuration asks for: the static text when
/// `fact_source.offline_text` is set, the HTTP source otherwise.
pub fn provider_from_config(config: &SkillConfig) -> Arc<dyn FactProvider> {
    match &config.fact_source.offline_text {
        Some(text) => {
            info!("Using offline fact provider");
            Arc::new(StaticFactProvider::new(text.clone()))
        }
        None => {
            info!(url = %config.fact_source.url, "Using remote fact provider");
            Arc::new(ForismaticFactProvider::from_config(&config.fact_source))
        }
    }
}
