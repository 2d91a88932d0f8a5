//! Fact domain module.
//!
//! - `provider`: the `FactProvider` trait consumed by the Greet, Fact and
//!   FollowUp handlers, plus the `Fact` value and `FetchError`.
//!
//! Concrete providers (HTTP, static) live in `greeter-infrastructure`.

mod provider;

pub use provider::{Fact, FactProvider, FetchError};
