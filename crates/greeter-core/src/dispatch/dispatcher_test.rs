use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::json;

use crate::config::SkillConfig;
use crate::dispatch::{
    Dispatcher, FACT_PENDING, GOODBYE_SPEECH, ONE_MORE_REPROMPT, WELCOME_REPROMPT,
    WRONG_INVOCATION_SPEECH,
};
use crate::error::SkillError;
use crate::fact::{Fact, FactProvider, FetchError};
use crate::request::RequestEnvelope;
use crate::response::{Card, CardImage, ResponseEnvelope};
use crate::time_of_day::FixedClock;

// Mock FactProvider that counts calls
struct MockFacts {
    result: Result<Fact, FetchError>,
    calls: AtomicUsize,
}

impl MockFacts {
    fn ok(text: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(Fact::new(text)),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(err: FetchError) -> Arc<Self> {
        Arc::new(Self {
            result: Err(err),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FactProvider for MockFacts {
    async fn fetch_fact(&self) -> Result<Fact, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn name(&self) -> &str {
        "mock"
    }
}

// 17:00 UTC is 09:00 at UTC-8
fn morning_dispatcher(facts: Arc<MockFacts>, config: SkillConfig) -> Dispatcher {
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 17, 0, 0).unwrap());
    Dispatcher::new(facts, config).with_clock(Arc::new(clock))
}

async fn respond(dispatcher: &Dispatcher, envelope: RequestEnvelope) -> ResponseEnvelope {
    dispatcher
        .dispatch(&envelope)
        .await
        .expect("dispatch should succeed")
        .expect("a response should be produced")
}

fn assert_reprompt_matches_session(response: &ResponseEnvelope) {
    assert_eq!(
        response.should_end_session(),
        response.response.reprompt.is_none(),
        "reprompt must be present iff the session stays open"
    );
}

#[tokio::test]
async fn test_launch_welcomes_and_waits() {
    let facts = MockFacts::ok("unused");
    let dispatcher = morning_dispatcher(facts.clone(), SkillConfig::default());

    let response = respond(&dispatcher, RequestEnvelope::launch()).await;

    assert!(response.speech().contains("Welcome to Uncle"));
    assert_eq!(
        response.reprompt_speech(),
        Some(format!("<speak>{WELCOME_REPROMPT}</speak>").as_str())
    );
    assert!(!response.should_end_session());
    assert!(response.card().is_none());
    assert!(response.session_attributes.is_none());
    assert_eq!(facts.calls(), 0);
}

#[tokio::test]
async fn test_greet_builds_full_greeting() {
    let facts = MockFacts::ok("Well begun is half done.");
    let dispatcher = morning_dispatcher(facts.clone(), SkillConfig::default());

    let response = respond(
        &dispatcher,
        RequestEnvelope::intent("HelloIntent").with_slot("FirstName", "John"),
    )
    .await;

    let speech = response.speech();
    assert!(speech.starts_with("<speak>Hello John. "));
    assert!(speech.contains("<say-as interpret-as='spell-out'>John</say-as>"));
    assert!(speech.contains("Good morning. "));
    assert!(speech.ends_with("Well begun is half done.</speak>"));
    assert!(response.should_end_session());
    assert_reprompt_matches_session(&response);
    assert!(response.session_attributes.is_none());

    let card = response.card().expect("greeting has a card");
    assert!(matches!(card, Card::Simple { .. }));
    assert!(card.title().contains("John"));
    assert_eq!(card.body(), "Well begun is half done.");
    assert_eq!(facts.calls(), 1);
}

#[tokio::test]
async fn test_greet_uses_standard_card_when_image_configured() {
    let mut config = SkillConfig::default();
    config.greeting.card_image = Some(CardImage {
        small_image_url: "https://cdn.example.com/720.png".to_string(),
        large_image_url: "https://cdn.example.com/1200.png".to_string(),
    });
    let dispatcher = morning_dispatcher(MockFacts::ok("Quote."), config);

    let response = respond(
        &dispatcher,
        RequestEnvelope::intent("Greet").with_slot("FirstName", "John"),
    )
    .await;

    match response.card() {
        Some(Card::Standard { title, text, image }) => {
            assert_eq!(title, "Hello John!");
            assert_eq!(text, "Quote.");
            assert!(image.small_image_url.starts_with("https://"));
        }
        other => panic!("expected a standard card, got {other:?}"),
    }
}

#[tokio::test]
async fn test_greet_evening_in_reference_zone() {
    // 03:00 UTC wraps to 19:00 at UTC-8
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 3, 0, 0).unwrap());
    let dispatcher =
        Dispatcher::new(MockFacts::ok("Q."), SkillConfig::default()).with_clock(Arc::new(clock));

    let response = respond(
        &dispatcher,
        RequestEnvelope::intent("Greet").with_slot("FirstName", "Ann"),
    )
    .await;

    assert!(response.speech().contains("Good evening. "));
}

#[tokio::test]
async fn test_greet_escapes_external_text() {
    let dispatcher = morning_dispatcher(MockFacts::ok("Salt & pepper."), SkillConfig::default());

    let response = respond(
        &dispatcher,
        RequestEnvelope::intent("Greet").with_slot("FirstName", "Jo<b>"),
    )
    .await;

    assert!(response.speech().contains("Hello Jo&lt;b&gt;. "));
    assert!(response.speech().contains("Salt &amp; pepper."));
    // Cards are plain text
    assert_eq!(response.card().unwrap().body(), "Salt & pepper.");
}

#[tokio::test]
async fn test_greet_missing_slot_skips_fact_lookup() {
    let facts = MockFacts::ok("unused");
    let dispatcher = morning_dispatcher(facts.clone(), SkillConfig::default());

    let err = dispatcher
        .dispatch(&RequestEnvelope::intent("Greet"))
        .await
        .unwrap_err();

    assert!(err.is_missing_slot());
    assert_eq!(facts.calls(), 0);
}

#[tokio::test]
async fn test_fact_arms_follow_up() {
    let facts = MockFacts::ok("Knowledge is power.");
    let dispatcher = morning_dispatcher(facts.clone(), SkillConfig::default());

    let response = respond(&dispatcher, RequestEnvelope::intent("QuoteIntent")).await;

    assert!(response.speech().contains("Knowledge is power."));
    assert!(response.speech().contains("one more quote"));
    assert_eq!(
        response.reprompt_speech(),
        Some(format!("<speak>{ONE_MORE_REPROMPT}</speak>").as_str())
    );
    assert!(!response.should_end_session());
    assert_eq!(response.session_attribute(FACT_PENDING), Some(&json!(true)));
    assert!(response.card().is_none());
    assert_eq!(facts.calls(), 1);
}

#[tokio::test]
async fn test_follow_up_with_pending_fact_behaves_like_fact() {
    let facts = MockFacts::ok("Another one.");
    let dispatcher = morning_dispatcher(facts.clone(), SkillConfig::default());

    let fact_response = respond(&dispatcher, RequestEnvelope::intent("Fact")).await;
    let follow_up = respond(
        &dispatcher,
        RequestEnvelope::intent("FollowUpFact").with_attribute(FACT_PENDING, json!(true)),
    )
    .await;

    assert_eq!(follow_up, fact_response);
    assert_eq!(follow_up.session_attribute(FACT_PENDING), Some(&json!(true)));
    assert_eq!(facts.calls(), 2);
}

#[tokio::test]
async fn test_follow_up_without_pending_fact_is_wrong_invocation() {
    let facts = MockFacts::ok("unused");
    let dispatcher = morning_dispatcher(facts.clone(), SkillConfig::default());

    for envelope in [
        RequestEnvelope::intent("NextQuoteIntent"),
        RequestEnvelope::intent("FollowUpFact").with_attribute(FACT_PENDING, json!(false)),
    ] {
        let response = respond(&dispatcher, envelope).await;
        assert_eq!(
            response.speech(),
            format!("<speak>{WRONG_INVOCATION_SPEECH}</speak>")
        );
        assert!(response.should_end_session());
        assert!(response.response.reprompt.is_none());
        assert!(response.session_attributes.is_none());
    }
    assert_eq!(facts.calls(), 0);
}

#[tokio::test]
async fn test_farewell_ignores_pending_fact() {
    let dispatcher = morning_dispatcher(MockFacts::ok("unused"), SkillConfig::default());

    let response = respond(
        &dispatcher,
        RequestEnvelope::intent("AMAZON.CancelIntent").with_attribute(FACT_PENDING, json!(true)),
    )
    .await;

    assert_eq!(response.speech(), format!("<speak>{GOODBYE_SPEECH}</speak>"));
    assert!(response.should_end_session());
    assert!(response.response.reprompt.is_none());
    assert!(response.card().is_none());
    assert!(response.session_attributes.is_none());
}

#[tokio::test]
async fn test_session_ended_produces_no_response() {
    let dispatcher = morning_dispatcher(MockFacts::ok("unused"), SkillConfig::default());

    let result = dispatcher.dispatch(&RequestEnvelope::session_ended()).await;

    assert_eq!(result, Ok(None));
}

#[tokio::test]
async fn test_fact_provider_failure_is_surfaced() {
    let facts = MockFacts::failing(FetchError::Transport("connection refused".to_string()));
    let dispatcher = morning_dispatcher(facts.clone(), SkillConfig::default());

    for envelope in [
        RequestEnvelope::intent("Fact"),
        RequestEnvelope::intent("FollowUpFact").with_attribute(FACT_PENDING, json!(true)),
        RequestEnvelope::intent("Greet").with_slot("FirstName", "John"),
    ] {
        let err = dispatcher.dispatch(&envelope).await.unwrap_err();
        assert!(err.is_fact_unavailable(), "{err}");
    }
    assert_eq!(facts.calls(), 3);
}

#[tokio::test]
async fn test_unknown_intent_and_request_type() {
    let dispatcher = morning_dispatcher(MockFacts::ok("unused"), SkillConfig::default());

    let err = dispatcher
        .dispatch(&RequestEnvelope::intent("AMAZON.HelpIntent"))
        .await
        .unwrap_err();
    assert_eq!(err, SkillError::unknown_intent("AMAZON.HelpIntent"));

    let mut envelope = RequestEnvelope::launch();
    envelope.request.request_type = "AudioPlayer.PlaybackStarted".to_string();
    let err = dispatcher.dispatch(&envelope).await.unwrap_err();
    assert!(err.is_unknown_request_type());
}

#[tokio::test]
async fn test_every_handler_keeps_reprompt_invariant() {
    let dispatcher = morning_dispatcher(MockFacts::ok("Q."), SkillConfig::default());

    let envelopes = vec![
        RequestEnvelope::launch(),
        RequestEnvelope::intent("Greet").with_slot("FirstName", "John"),
        RequestEnvelope::intent("Fact"),
        RequestEnvelope::intent("FollowUpFact").with_attribute(FACT_PENDING, json!(true)),
        RequestEnvelope::intent("FollowUpFact"),
        RequestEnvelope::intent("Stop"),
        RequestEnvelope::intent("Cancel"),
    ];

    for envelope in envelopes {
        let response = respond(&dispatcher, envelope).await;
        assert_reprompt_matches_session(&response);
        assert!(response.speech().starts_with("<speak>"));
        assert!(response.speech().ends_with("</speak>"));
    }
}
