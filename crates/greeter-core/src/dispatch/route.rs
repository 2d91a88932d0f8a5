//! Synchronous handler selection.

use super::state::FactState;
use crate::error::{Result, SkillError};
use crate::request::{RequestEnvelope, RequestType};

/// Slot carrying the name to greet.
pub const FIRST_NAME_SLOT: &str = "FirstName";

/// Intents the skill handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    Greet,
    Fact,
    FollowUpFact,
    Farewell,
}

impl IntentKind {
    /// Resolves an intent name. Accepts the short names and the names the
    /// voice platform's interaction model uses.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Greet" | "HelloIntent" => Some(Self::Greet),
            "Fact" | "QuoteIntent" => Some(Self::Fact),
            "FollowUpFact" | "NextQuoteIntent" => Some(Self::FollowUpFact),
            "Stop" | "Cancel" | "AMAZON.StopIntent" | "AMAZON.CancelIntent" => {
                Some(Self::Farewell)
            }
            _ => None,
        }
    }
}

/// The handler chosen for a request, with its validated inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Launch,
    Greet { name: String },
    Fact,
    FollowUpFact { state: FactState },
    Farewell,
    SessionEnded,
}

impl Route {
    /// Selects exactly one route for `envelope`.
    ///
    /// Required slots are validated here, so a handler never starts (and
    /// never calls the fact provider) for an incomplete request.
    pub fn select(envelope: &RequestEnvelope) -> Result<Self> {
        let raw_type = envelope.request.request_type.as_str();
        let request_type = RequestType::parse(raw_type)
            .ok_or_else(|| SkillError::unknown_request_type(raw_type))?;

        match request_type {
            RequestType::Launch => Ok(Self::Launch),
            RequestType::SessionEnded => Ok(Self::SessionEnded),
            RequestType::Intent => {
                let intent = envelope
                    .request
                    .intent
                    .as_ref()
                    .ok_or_else(|| SkillError::unknown_intent("<none>"))?;
                let kind = IntentKind::from_name(&intent.name)
                    .ok_or_else(|| SkillError::unknown_intent(&intent.name))?;

                match kind {
                    IntentKind::Greet => {
                        let name = intent
                            .slot_value(FIRST_NAME_SLOT)
                            .ok_or_else(|| SkillError::missing_slot(&intent.name, FIRST_NAME_SLOT))?;
                        Ok(Self::Greet {
                            name: name.to_string(),
                        })
                    }
                    IntentKind::Fact => Ok(Self::Fact),
                    IntentKind::FollowUpFact => Ok(Self::FollowUpFact {
                        state: FactState::from_request(envelope),
                    }),
                    IntentKind::Farewell => Ok(Self::Farewell),
                }
            }
        }
    }

    /// Short label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Launch => "launch",
            Self::Greet { .. } => "greet",
            Self::Fact => "fact",
            Self::FollowUpFact { .. } => "follow_up_fact",
            Self::Farewell => "farewell",
            Self::SessionEnded => "session_ended",
        }
    }
}
