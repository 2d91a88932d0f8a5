//! Handler output prior to envelope construction.

use serde::{Deserialize, Serialize};

use crate::request::SessionAttributes;

/// Image pair attached to a `Standard` card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImage {
    pub small_image_url: String,
    pub large_image_url: String,
}

/// Everything a handler decided for one turn.
///
/// Constructed through [`OutputFields::ask`] (the conversation continues and
/// a reprompt is mandatory) or [`OutputFields::tell`] (the session ends and
/// there is no reprompt), so the end-session flag and the reprompt can never
/// disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFields {
    speech_text: String,
    reprompt_text: Option<String>,
    end_session: bool,
    card_title: Option<String>,
    card_content: Option<String>,
    image: Option<CardImage>,
    session_attributes: Option<SessionAttributes>,
}

impl OutputFields {
    /// Speaks `speech_text` and keeps the session open, reprompting with
    /// `reprompt_text` if the user stays silent. An empty reprompt repeats
    /// the speech.
    pub fn ask(speech_text: impl Into<String>, reprompt_text: impl Into<String>) -> Self {
        let speech_text = speech_text.into();
        let reprompt_text = reprompt_text.into();
        let reprompt_text = if reprompt_text.trim().is_empty() {
            speech_text.clone()
        } else {
            reprompt_text
        };
        Self {
            speech_text,
            reprompt_text: Some(reprompt_text),
            end_session: false,
            card_title: None,
            card_content: None,
            image: None,
            session_attributes: None,
        }
    }

    /// Speaks `speech_text` and ends the session.
    pub fn tell(speech_text: impl Into<String>) -> Self {
        Self {
            speech_text: speech_text.into(),
            reprompt_text: None,
            end_session: true,
            card_title: None,
            card_content: None,
            image: None,
            session_attributes: None,
        }
    }

    /// Attaches a text card.
    pub fn with_card(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.card_title = Some(title.into());
        self.card_content = Some(content.into());
        self
    }

    /// Attaches card images. Only takes effect when a card title is set.
    pub fn with_image(mut self, image: Option<CardImage>) -> Self {
        self.image = image;
        self
    }

    /// Sets the attributes the caller should persist for the next turn.
    pub fn with_session_attributes(mut self, attributes: SessionAttributes) -> Self {
        self.session_attributes = Some(attributes);
        self
    }

    pub fn speech_text(&self) -> &str {
        &self.speech_text
    }

    pub fn reprompt_text(&self) -> Option<&str> {
        self.reprompt_text.as_deref()
    }

    pub fn end_session(&self) -> bool {
        self.end_session
    }

    pub fn card_title(&self) -> Option<&str> {
        self.card_title.as_deref()
    }

    pub fn card_content(&self) -> Option<&str> {
        self.card_content.as_deref()
    }

    pub fn image(&self) -> Option<&CardImage> {
        self.image.as_ref()
    }

    pub fn session_attributes(&self) -> Option<&SessionAttributes> {
        self.session_attributes.as_ref()
    }

    pub(crate) fn into_parts(self) -> OutputParts {
        OutputParts {
            speech_text: self.speech_text,
            reprompt_text: self.reprompt_text,
            end_session: self.end_session,
            card_title: self.card_title,
            card_content: self.card_content,
            image: self.image,
            session_attributes: self.session_attributes,
        }
    }
}

/// Owned, destructurable view used by the envelope builder.
pub(crate) struct OutputParts {
    pub speech_text: String,
    pub reprompt_text: Option<String>,
    pub end_session: bool,
    pub card_title: Option<String>,
    pub card_content: Option<String>,
    pub image: Option<CardImage>,
    pub session_attributes: Option<SessionAttributes>,
}
