//! Core of the Greeter voice skill.
//!
//! Turns a platform request envelope (plus the caller-held session) into a
//! response envelope: routing, the fact-pending continuation gate, the
//! per-intent handlers and the envelope builder. The fact source is reached
//! only through the [`fact::FactProvider`] trait.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod fact;
pub mod request;
pub mod response;
pub mod ssml;
pub mod time_of_day;

// Re-export the types most callers need
pub use config::SkillConfig;
pub use dispatch::Dispatcher;
pub use error::{Result, SkillError};
pub use request::RequestEnvelope;
pub use response::ResponseEnvelope;
