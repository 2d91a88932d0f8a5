use std::path::PathBuf;

use anyhow::{Context, Result};
use greeter_core::{Dispatcher, RequestEnvelope};
use greeter_infrastructure::provider_from_config;
use tokio::io::AsyncReadExt;
use tracing::info;

use super::utils::load_config;

pub async fn run(
    config_path: Option<PathBuf>,
    input: &str,
    offline_fact: Option<String>,
    pretty: bool,
) -> Result<()> {
    let mut config = load_config(config_path).await?;
    if offline_fact.is_some() {
        config.fact_source.offline_text = offline_fact;
    }

    let raw = read_input(input).await?;
    let envelope = RequestEnvelope::from_json(&raw)
        .with_context(|| format!("Failed to parse request from {}", input))?;

    let dispatcher = Dispatcher::new(provider_from_config(&config), config);
    let response = dispatcher
        .dispatch(&envelope)
        .await
        .context("Request could not be handled")?;

    match response {
        Some(response) => {
            let json = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{}", json);
        }
        None => info!("Session ended, no response"),
    }

    Ok(())
}

async fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut raw = String::new();
        tokio::io::stdin()
            .read_to_string(&mut raw)
            .await
            .context("Failed to read request from stdin")?;
        Ok(raw)
    } else {
        tokio::fs::read_to_string(input)
            .await
            .with_context(|| format!("Failed to read {}", input))
    }
}
