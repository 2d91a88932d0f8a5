pub mod config_service;
pub mod fact;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::fact::{ForismaticFactProvider, StaticFactProvider, provider_from_config};
pub use crate::paths::GreeterPaths;
