//! Response domain module.
//!
//! - `output`: `OutputFields`, the immutable per-turn result of a handler
//! - `envelope`: the protocol envelope (`ResponseEnvelope`) and its builder

mod envelope;
mod output;

pub use envelope::{Card, OutputSpeech, Reprompt, ResponseBody, ResponseEnvelope, RESPONSE_VERSION};
pub use output::{CardImage, OutputFields};
