//! Fact provider contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A short piece of text to be read out to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// The spoken text
    pub text: String,
    /// Attribution, if the source provides one. Never spoken.
    #[serde(default)]
    pub author: Option<String>,
}

impl Fact {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// Failure modes of a fact lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (connect, DNS, timeout)
    #[error("transport error: {0}")]
    Transport(String),

    /// The source answered with a non-success status
    #[error("source returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The payload could not be decoded
    #[error("malformed payload: {0}")]
    Malformed(String),

    /// The payload decoded but carried no text
    #[error("source returned an empty fact")]
    Empty,
}

/// Supplies facts on demand.
///
/// Implementations perform at most one lookup per call and never substitute
/// a default on failure; the dispatcher turns any `FetchError` into
/// `SkillError::FactUnavailable`.
#[async_trait]
pub trait FactProvider: Send + Sync {
    /// Fetches a single fact.
    async fn fetch_fact(&self) -> Result<Fact, FetchError>;

    /// Short name used in logs.
    fn name(&self) -> &str;
}
