//! Request domain module.
//!
//! - `model`: the inbound envelope (`RequestEnvelope`, `Request`,
//!   `SessionState`, `Intent`, `Slot`) and the recognised `RequestType`s.

mod model;

pub use model::{
    Application, Intent, Request, RequestEnvelope, RequestType, SessionAttributes, SessionState,
    Slot, User,
};
