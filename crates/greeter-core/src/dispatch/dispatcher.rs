//! Request dispatcher.

use std::sync::Arc;

use tracing::{info, warn};

use super::handlers::{self, HandlerContext};
use super::route::Route;
use crate::config::SkillConfig;
use crate::error::Result;
use crate::fact::FactProvider;
use crate::request::RequestEnvelope;
use crate::response::{OutputFields, ResponseEnvelope};
use crate::time_of_day::{Clock, SystemClock, TimeOfDay};

/// Routes request envelopes to handlers and builds the response envelope.
///
/// Holds no per-conversation state: session attributes arrive with the
/// request and leave with the response, so one dispatcher can serve any
/// number of concurrent invocations.
#[derive(Clone)]
pub struct Dispatcher {
    facts: Arc<dyn FactProvider>,
    clock: Arc<dyn Clock>,
    config: SkillConfig,
}

impl Dispatcher {
    /// Creates a dispatcher using the wall clock.
    pub fn new(facts: Arc<dyn FactProvider>, config: SkillConfig) -> Self {
        Self {
            facts,
            clock: Arc::new(SystemClock),
            config,
        }
    }

    /// Replaces the clock used for the time-of-day greeting.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &SkillConfig {
        &self.config
    }

    /// Handles one invocation.
    ///
    /// Returns `Ok(None)` for `SessionEndedRequest`, which produces no
    /// output. Any error is terminal for the invocation; no partial
    /// response is ever returned alongside it.
    pub async fn dispatch(&self, envelope: &RequestEnvelope) -> Result<Option<ResponseEnvelope>> {
        let request_id = envelope.request.request_id.as_deref().unwrap_or("-");

        let route = match Route::select(envelope) {
            Ok(route) => route,
            Err(e) => {
                warn!(request_id, request_type = %envelope.request.request_type, error = %e, "Rejected request");
                return Err(e);
            }
        };
        info!(request_id, route = route.label(), "Dispatching request");

        let fields = match self.run(route).await {
            Ok(Some(fields)) => fields,
            Ok(None) => {
                info!(
                    request_id,
                    reason = envelope.request.reason.as_deref().unwrap_or("unspecified"),
                    "Session ended"
                );
                return Ok(None);
            }
            Err(e) => {
                warn!(request_id, error = %e, "Handler failed");
                return Err(e);
            }
        };

        Ok(Some(ResponseEnvelope::build(fields)))
    }

    async fn run(&self, route: Route) -> Result<Option<OutputFields>> {
        let ctx = HandlerContext {
            facts: self.facts.as_ref(),
            time_of_day: TimeOfDay::classify(self.clock.now(), self.config.time_zone_offset_hours),
            card_image: self.config.greeting.card_image.as_ref(),
        };

        let fields = match route {
            Route::Launch => handlers::launch(),
            Route::Greet { name } => handlers::greet(&ctx, &name).await?,
            Route::Fact => handlers::fact(&ctx).await?,
            Route::FollowUpFact { state } => handlers::follow_up_fact(&ctx, state).await?,
            Route::Farewell => handlers::farewell(),
            Route::SessionEnded => return Ok(None),
        };
        Ok(Some(fields))
    }
}
