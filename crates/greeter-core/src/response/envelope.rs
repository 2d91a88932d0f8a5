//! Outbound response envelope and its builder.

use serde::{Deserialize, Serialize};

use super::output::{CardImage, OutputFields, OutputParts};
use crate::request::SessionAttributes;
use crate::ssml;

pub const RESPONSE_VERSION: &str = "1.0";
const SSML: &str = "SSML";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub response: ResponseBody,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<SessionAttributes>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub output_speech: OutputSpeech,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub ssml: String,
}

impl OutputSpeech {
    fn ssml(text: &str) -> Self {
        Self {
            speech_type: SSML.to_string(),
            ssml: ssml::speak(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

/// Visual card. `Simple` carries text as `content`; `Standard` carries it
/// as `text` next to an image pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Card {
    Simple {
        title: String,
        content: String,
    },
    Standard {
        title: String,
        text: String,
        image: CardImage,
    },
}

impl Card {
    pub fn title(&self) -> &str {
        match self {
            Card::Simple { title, .. } | Card::Standard { title, .. } => title,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Card::Simple { content, .. } => content,
            Card::Standard { text, .. } => text,
        }
    }
}

impl ResponseEnvelope {
    /// Builds the envelope from a handler's output.
    ///
    /// Pure structural transform: speech is wrapped in `<speak>`, the
    /// reprompt is emitted exactly when the session stays open, the card only
    /// for a non-empty title (upgraded to `Standard` by an image), and
    /// session attributes are passed through untouched.
    pub fn build(fields: OutputFields) -> Self {
        let OutputParts {
            speech_text,
            reprompt_text,
            end_session,
            card_title,
            card_content,
            image,
            session_attributes,
        } = fields.into_parts();

        // An open session always reprompts; `OutputFields::ask` guarantees
        // non-empty text, the speech stands in otherwise.
        let reprompt = (!end_session).then(|| {
            let text = reprompt_text
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| speech_text.clone());
            Reprompt {
                output_speech: OutputSpeech::ssml(&text),
            }
        });

        let card = card_title
            .filter(|title| !title.is_empty())
            .map(|title| {
                let body = card_content.unwrap_or_default();
                match image {
                    Some(image) => Card::Standard {
                        title,
                        text: body,
                        image,
                    },
                    None => Card::Simple {
                        title,
                        content: body,
                    },
                }
            });

        Self {
            version: RESPONSE_VERSION.to_string(),
            response: ResponseBody {
                output_speech: OutputSpeech::ssml(&speech_text),
                reprompt,
                card,
                should_end_session: end_session,
            },
            session_attributes,
        }
    }

    /// Spoken markup of the main output.
    pub fn speech(&self) -> &str {
        &self.response.output_speech.ssml
    }

    /// Spoken markup of the reprompt, if any.
    pub fn reprompt_speech(&self) -> Option<&str> {
        self.response
            .reprompt
            .as_ref()
            .map(|r| r.output_speech.ssml.as_str())
    }

    pub fn should_end_session(&self) -> bool {
        self.response.should_end_session
    }

    pub fn card(&self) -> Option<&Card> {
        self.response.card.as_ref()
    }

    pub fn session_attribute(&self, key: &str) -> Option<&serde_json::Value> {
        self.session_attributes.as_ref().and_then(|a| a.get(key))
    }
}
