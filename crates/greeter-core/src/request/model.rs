//! Inbound request envelope as delivered by the voice platform.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Caller-persisted key/value state carried across turns.
pub type SessionAttributes = serde_json::Map<String, Value>;

/// The request envelope for one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionState>,
    pub request: Request,
}

fn default_version() -> String {
    "1.0".to_string()
}

/// Session object supplied by the caller.
///
/// Only `attributes` influences dispatch; the remaining fields are carried
/// for logging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default)]
    pub new: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// May be absent or `null`; both read as empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<SessionAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl SessionState {
    /// Looks up a session attribute, treating a missing mapping as empty.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.as_ref().and_then(|attrs| attrs.get(key))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default)]
    pub application_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub user_id: String,
}

/// The request body.
///
/// `type` is kept as the raw wire string; an unrecognised value is reported
/// by the dispatcher as `UnknownRequestType` rather than failing to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Why the platform closed the session (`SessionEndedRequest` only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
}

/// Kinds of request the skill recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestType {
    Launch,
    Intent,
    SessionEnded,
}

impl RequestType {
    /// Parses a wire request type. Both the platform names
    /// (`LaunchRequest`) and the short names (`Launch`) are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "LaunchRequest" | "Launch" => Some(Self::Launch),
            "IntentRequest" | "Intent" => Some(Self::Intent),
            "SessionEndedRequest" | "SessionEnded" => Some(Self::SessionEnded),
            _ => None,
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Launch => "LaunchRequest",
            Self::Intent => "IntentRequest",
            Self::SessionEnded => "SessionEndedRequest",
        }
    }
}

/// A resolved user intent.
///
/// Platforms send `"intent": {}` on non-intent requests, so every field is
/// optional on the wire; an empty name simply matches no handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<HashMap<String, Slot>>,
}

impl Intent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: None,
        }
    }

    /// Returns the value of `slot_name` if the slot is present and filled.
    pub fn slot_value(&self, slot_name: &str) -> Option<&str> {
        self.slots
            .as_ref()
            .and_then(|slots| slots.get(slot_name))
            .and_then(|slot| slot.value.as_deref())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// A named parameter extracted from the user's utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

// ============================================================================
// Construction helpers
// ============================================================================

impl RequestEnvelope {
    /// Decodes an envelope from its JSON wire form.
    pub fn from_json(raw: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    fn with_type(request_type: RequestType) -> Self {
        Self {
            version: default_version(),
            session: None,
            request: Request {
                request_type: request_type.as_wire().to_string(),
                request_id: None,
                timestamp: None,
                locale: None,
                reason: None,
                intent: None,
            },
        }
    }

    /// A `LaunchRequest` with no session.
    pub fn launch() -> Self {
        Self::with_type(RequestType::Launch)
    }

    /// An `IntentRequest` for `name` with no slots.
    pub fn intent(name: impl Into<String>) -> Self {
        let mut envelope = Self::with_type(RequestType::Intent);
        envelope.request.intent = Some(Intent::new(name));
        envelope
    }

    /// A `SessionEndedRequest`.
    pub fn session_ended() -> Self {
        Self::with_type(RequestType::SessionEnded)
    }

    /// Adds a filled slot to the intent. No-op for non-intent requests.
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Some(intent) = self.request.intent.as_mut() {
            let name = name.into();
            intent.slots.get_or_insert_with(HashMap::new).insert(
                name.clone(),
                Slot {
                    name,
                    value: Some(value.into()),
                },
            );
        }
        self
    }

    /// Sets a session attribute, creating the session if needed.
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.session
            .get_or_insert_with(SessionState::default)
            .attributes
            .get_or_insert_with(SessionAttributes::new)
            .insert(key.into(), value);
        self
    }

    /// Replaces the session wholesale.
    pub fn with_session(mut self, session: SessionState) -> Self {
        self.session = Some(session);
        self
    }

    /// Looks up a session attribute; a missing session reads as empty.
    pub fn session_attribute(&self, key: &str) -> Option<&Value> {
        self.session.as_ref().and_then(|s| s.attribute(key))
    }
}
