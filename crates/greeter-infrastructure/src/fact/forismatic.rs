//! ForismaticFactProvider - quote lookup against the forismatic.com API.

use std::time::Duration;

use async_trait::async_trait;
use greeter_core::config::FactSourceConfig;
use greeter_core::fact::{Fact, FactProvider, FetchError};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteResponse {
    quote_text: String,
    #[serde(default)]
    quote_author: Option<String>,
}

/// Fetches one random English quote per call.
#[derive(Clone)]
pub struct ForismaticFactProvider {
    client: Client,
    url: String,
    timeout: Duration,
}

impl ForismaticFactProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &FactSourceConfig) -> Self {
        Self::new(&config.url, Duration::from_secs(config.timeout_secs))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FactProvider for ForismaticFactProvider {
    async fn fetch_fact(&self) -> Result<Fact, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        debug!(bytes = body.len(), "Received quote payload");

        parse_quote(&body)
    }

    fn name(&self) -> &str {
        "forismatic"
    }
}

/// Decodes a quote payload.
///
/// The service escapes apostrophes as `\'`, which is not valid JSON, so
/// backslashes are stripped before decoding.
pub fn parse_quote(body: &str) -> Result<Fact, FetchError> {
    let cleaned = body.replace('\\', "");
    let quote: QuoteResponse =
        serde_json::from_str(&cleaned).map_err(|e| FetchError::Malformed(e.to_string()))?;

    let text = quote.quote_text.trim();
    if text.is_empty() {
        return Err(FetchError::Empty);
    }

    let mut fact = Fact::new(text);
    if let Some(author) = quote.quote_author.map(|a| a.trim().to_string()).filter(|a| !a.is_empty()) {
        fact = fact.with_author(author);
    }
    Ok(fact)
}
