//! Per-intent handlers.
//!
//! Each handler returns an immutable `OutputFields`; the dispatcher turns it
//! into the response envelope.

use tracing::debug;

use super::state::FactState;
use crate::error::Result;
use crate::fact::{Fact, FactProvider};
use crate::response::{CardImage, OutputFields};
use crate::ssml;
use crate::time_of_day::TimeOfDay;

pub const WELCOME_SPEECH: &str = "Welcome to Uncle Rusty's Greeting Skill. Using this skill you can greet your guests and amaze them. For example, you can say, say hello to John. ";
pub const WELCOME_REPROMPT: &str =
    "Whom do you care to greet? You can say, for example, say hello to John. ";
pub const ONE_MORE_PROMPT: &str = "Do you want to listen to one more quote? ";
pub const ONE_MORE_REPROMPT: &str = "You can say yes or one more. ";
pub const WRONG_INVOCATION_SPEECH: &str = "Wrong invocation of this intent. ";
pub const GOODBYE_SPEECH: &str = "Good bye. ";

/// Collaborators shared by the handlers of one dispatch.
pub(crate) struct HandlerContext<'a> {
    pub facts: &'a dyn FactProvider,
    pub time_of_day: TimeOfDay,
    pub card_image: Option<&'a CardImage>,
}

impl HandlerContext<'_> {
    async fn fetch_fact(&self) -> Result<Fact> {
        let fact = self.facts.fetch_fact().await?;
        debug!(provider = self.facts.name(), chars = fact.text.len(), "Fetched fact");
        Ok(fact)
    }
}

pub(crate) fn launch() -> OutputFields {
    OutputFields::ask(WELCOME_SPEECH, WELCOME_REPROMPT)
}

pub(crate) async fn greet(ctx: &HandlerContext<'_>, name: &str) -> Result<OutputFields> {
    let escaped_name = ssml::escape(name);
    let mut speech = format!("Hello {escaped_name}. ");
    speech.push_str(&format!(
        "I think your name is spelled {}. ",
        ssml::spell_out(name)
    ));
    speech.push_str(ctx.time_of_day.greeting());

    let fact = ctx.fetch_fact().await?;
    speech.push_str(&ssml::escape(&fact.text));

    Ok(OutputFields::tell(speech)
        .with_card(format!("Hello {name}!"), fact.text)
        .with_image(ctx.card_image.cloned()))
}

pub(crate) async fn fact(ctx: &HandlerContext<'_>) -> Result<OutputFields> {
    let fact = ctx.fetch_fact().await?;
    let speech = format!("{} {ONE_MORE_PROMPT}", ssml::escape(fact.text.trim_end()));

    Ok(OutputFields::ask(speech, ONE_MORE_REPROMPT)
        .with_session_attributes(FactState::FactPending.to_attributes()))
}

pub(crate) async fn follow_up_fact(
    ctx: &HandlerContext<'_>,
    state: FactState,
) -> Result<OutputFields> {
    match state {
        FactState::FactPending => fact(ctx).await,
        FactState::NoFactPending => Ok(OutputFields::tell(WRONG_INVOCATION_SPEECH)),
    }
}

pub(crate) fn farewell() -> OutputFields {
    OutputFields::tell(GOODBYE_SPEECH)
}
