//! Dispatch domain module.
//!
//! # Module Structure
//!
//! - `route`: synchronous selection of one handler per request (`Route`,
//!   `IntentKind`), including required-slot validation
//! - `state`: the fact-pending continuation gate (`FactState`)
//! - `handlers`: Launch, Greet, Fact, FollowUpFact and Farewell
//! - `dispatcher`: `Dispatcher`, tying routing, handlers and the envelope
//!   builder together
//!
//! # Usage
//!
//! ```ignore
//! use greeter_core::dispatch::Dispatcher;
//!
//! let dispatcher = Dispatcher::new(facts, SkillConfig::default());
//! let response = dispatcher.dispatch(&envelope).await?;
//! ```

mod dispatcher;
mod handlers;
mod route;
mod state;

#[cfg(test)]
mod dispatcher_test;

pub use dispatcher::Dispatcher;
pub use handlers::{
    GOODBYE_SPEECH, ONE_MORE_PROMPT, ONE_MORE_REPROMPT, WELCOME_REPROMPT, WELCOME_SPEECH,
    WRONG_INVOCATION_SPEECH,
};
pub use route::{FIRST_NAME_SLOT, IntentKind, Route};
pub use state::{FACT_PENDING, FactState};
