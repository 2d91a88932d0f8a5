//! Session-continuation state.

use serde_json::Value;

use crate::request::{RequestEnvelope, SessionAttributes};

/// Session attribute that marks an offered follow-up fact.
pub const FACT_PENDING: &str = "factPending";

/// Whether the previous turn offered another fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FactState {
    /// Fresh session, or the last turn did not offer a fact
    #[default]
    NoFactPending,
    /// The last turn ended with "one more?"
    FactPending,
}

impl FactState {
    /// Reads the state from the incoming session.
    ///
    /// Only a JSON `true` arms the follow-up; a missing session, missing
    /// attributes, `false` or any other value read as `NoFactPending`.
    pub fn from_request(envelope: &RequestEnvelope) -> Self {
        match envelope.session_attribute(FACT_PENDING) {
            Some(Value::Bool(true)) => Self::FactPending,
            _ => Self::NoFactPending,
        }
    }

    /// Attributes that persist this state for the next turn.
    pub fn to_attributes(self) -> SessionAttributes {
        let mut attributes = SessionAttributes::new();
        attributes.insert(
            FACT_PENDING.to_string(),
            Value::Bool(self == Self::FactPending),
        );
        attributes
    }

    pub fn is_pending(self) -> bool {
        self == Self::FactPending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fresh_session_is_not_pending() {
        assert_eq!(
            FactState::from_request(&RequestEnvelope::intent("FollowUpFact")),
            FactState::NoFactPending
        );
    }

    #[test]
    fn test_true_flag_is_pending() {
        let envelope = RequestEnvelope::intent("FollowUpFact").with_attribute(FACT_PENDING, json!(true));
        assert!(FactState::from_request(&envelope).is_pending());
    }

    #[test]
    fn test_non_boolean_flag_is_not_pending() {
        for value in [json!(false), json!("true"), json!(1), Value::Null] {
            let envelope = RequestEnvelope::intent("FollowUpFact").with_attribute(FACT_PENDING, value);
            assert_eq!(FactState::from_request(&envelope), FactState::NoFactPending);
        }
    }

    #[test]
    fn test_to_attributes() {
        let attrs = FactState::FactPending.to_attributes();
        assert_eq!(attrs.get(FACT_PENDING), Some(&json!(true)));
        assert_eq!(attrs.len(), 1);
    }
}
