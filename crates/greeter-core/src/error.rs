//! Error types for the Greeter skill.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fact::FetchError;

/// A shared error type for the entire Greeter skill.
///
/// The first four variants form the dispatch taxonomy: every one of them is
/// terminal for the current invocation and is surfaced to the caller instead
/// of a response. The remaining variants only occur outside the dispatch path
/// (loading configuration, decoding envelopes).
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillError {
    /// The request `type` is not one the skill understands
    #[error("Unknown request type: '{0}'")]
    UnknownRequestType(String),

    /// The intent name has no handler
    #[error("Unknown intent: '{0}'")]
    UnknownIntent(String),

    /// A slot the intent requires was absent or had no value
    #[error("Missing slot '{slot}' for intent '{intent}'")]
    MissingSlot { intent: String, slot: String },

    /// The fact provider could not supply a fact
    #[error("Fact unavailable: {0}")]
    FactUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },
}

impl SkillError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an UnknownRequestType error
    pub fn unknown_request_type(request_type: impl Into<String>) -> Self {
        Self::UnknownRequestType(request_type.into())
    }

    /// Creates an UnknownIntent error
    pub fn unknown_intent(name: impl Into<String>) -> Self {
        Self::UnknownIntent(name.into())
    }

    /// Creates a MissingSlot error
    pub fn missing_slot(intent: impl Into<String>, slot: impl Into<String>) -> Self {
        Self::MissingSlot {
            intent: intent.into(),
            slot: slot.into(),
        }
    }

    /// Creates a FactUnavailable error
    pub fn fact_unavailable(message: impl Into<String>) -> Self {
        Self::FactUnavailable(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_unknown_request_type(&self) -> bool {
        matches!(self, Self::UnknownRequestType(_))
    }

    pub fn is_unknown_intent(&self) -> bool {
        matches!(self, Self::UnknownIntent(_))
    }

    pub fn is_missing_slot(&self) -> bool {
        matches!(self, Self::MissingSlot { .. })
    }

    pub fn is_fact_unavailable(&self) -> bool {
        matches!(self, Self::FactUnavailable(_))
    }

    /// Whether the error was caused by the caller's request rather than by
    /// a collaborator or the environment.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownRequestType(_) | Self::UnknownIntent(_) | Self::MissingSlot { .. }
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<FetchError> for SkillError {
    fn from(err: FetchError) -> Self {
        Self::FactUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for SkillError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SkillError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, SkillError>`.
pub type Result<T> = std::result::Result<T, SkillError>;
