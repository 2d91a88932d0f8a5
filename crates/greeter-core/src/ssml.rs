//! Helpers for speech synthesis markup.

/// Wraps spoken text in the SSML root element.
pub fn speak(text: &str) -> String {
    format!("<speak>{text}</speak>")
}

/// Escapes text coming from outside the skill (slot values, fetched facts)
/// so it can be embedded in SSML without breaking the document.
pub fn escape(text: &str) -> String {
    quick_xml::escape::escape(text).into_owned()
}

/// Renders `text` so the voice reads it letter by letter.
pub fn spell_out(text: &str) -> String {
    format!("<say-as interpret-as='spell-out'>{}</say-as>", escape(text))
}
