//! End-to-end submission tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::{Query, State};
use axum::routing::get;
use mutanabi_client::{ClientError, ClientSettings, GenerationClient, PoemGenerator};
use mutanabi_core::{Completion, ControllerState, ResponsePolicy, SubmissionController};
use mutanabi_model::{Field, Label, MessageCode, ValidatedInput};

type Seen = Arc<Mutex<Vec<HashMap<String, String>>>>;

async fn spawn_service() -> (String, Seen) {
    let seen: Seen = Arc::default();
    let app = Router::new()
        .route(
            "/generate",
            get(
                |State(seen): State<Seen>, Query(params): Query<HashMap<String, String>>| async move {
                    let poem = format!("على قدر أهل العزم تأتي العزائم ({})", params["length"]);
                    seen.lock().unwrap().push(params);
                    axum::Json(poem)
                },
            ),
        )
        .with_state(Arc::clone(&seen));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/generate"), seen)
}

/// Generator that answers after a delay, to order overlapping requests.
struct Delayed {
    delay: Duration,
    result: fn(&ValidatedInput) -> Result<String, ClientError>,
}

impl PoemGenerator for Delayed {
    async fn generate(&self, input: &ValidatedInput) -> Result<String, ClientError> {
        tokio::time::sleep(self.delay).await;
        (self.result)(input)
    }
}

#[tokio::test]
async fn valid_form_sends_one_request_and_shows_poem() {
    let (endpoint, seen) = spawn_service().await;
    let client = GenerationClient::new(&ClientSettings::with_endpoint(endpoint)).unwrap();

    let mut controller = SubmissionController::new();
    controller.edit_word("قمر");
    controller.edit_count("5");
    assert!(controller.can_submit());

    let completion = controller.submit_with(&client).await.unwrap();

    assert_eq!(completion, Completion::Succeeded);
    assert_eq!(controller.state(), ControllerState::Succeeded);
    assert_eq!(
        controller.result_text(),
        Some("على قدر أهل العزم تأتي العزائم (5)")
    );
    assert!(!controller.form().is_submitting);
    assert_eq!(controller.submit_label(), Label::Submit);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0]["seed"], "قمر");
    assert_eq!(seen[0]["length"], "5");
}

#[tokio::test]
async fn invalid_form_never_reaches_the_service() {
    let (endpoint, seen) = spawn_service().await;
    let client = GenerationClient::new(&ClientSettings::with_endpoint(endpoint)).unwrap();

    let mut controller = SubmissionController::new();
    controller.edit_word("hello");
    controller.edit_count("3.5");

    let errors = controller.submit_with(&client).await.unwrap_err();

    assert_eq!(errors[&Field::Word].code, MessageCode::ArabicOnly);
    assert_eq!(errors[&Field::Count].code, MessageCode::CountNotInteger);
    assert_eq!(controller.state(), ControllerState::Invalid);
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn arabic_indic_count_is_sent_as_western_digits() {
    let (endpoint, seen) = spawn_service().await;
    let client = GenerationClient::new(&ClientSettings::with_endpoint(endpoint)).unwrap();

    let mut controller = SubmissionController::new();
    controller.edit_word("شمس");
    controller.edit_count("١٢");
    controller.submit_with(&client).await.unwrap();

    assert_eq!(seen.lock().unwrap()[0]["length"], "12");
}

#[tokio::test]
async fn unreachable_service_fails_quietly() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client =
        GenerationClient::new(&ClientSettings::with_endpoint(format!("http://{addr}/generate")))
            .unwrap();

    let mut controller = SubmissionController::new();
    controller.edit_word("قمر");
    controller.edit_count("5");
    let completion = controller.submit_with(&client).await.unwrap();

    assert_eq!(completion, Completion::Failed);
    assert!(controller.result_text().is_none());
    assert!(!controller.form().is_submitting);
    assert!(!controller.form().has_errors());

    controller.edit_count("6");
    assert_eq!(controller.state(), ControllerState::Idle);
}

#[tokio::test(start_paused = true)]
async fn overlapping_requests_resolve_last_response_wins() {
    let slow = Delayed {
        delay: Duration::from_secs(3),
        result: |_| Ok("slow".to_string()),
    };
    let fast = Delayed {
        delay: Duration::from_secs(1),
        result: |_| Ok("fast".to_string()),
    };

    for (policy, expected) in [
        (ResponsePolicy::LastResolvedWins, "slow"),
        (ResponsePolicy::LatestRequestWins, "fast"),
    ] {
        let mut controller = SubmissionController::with_policy(policy);
        controller.edit_word("قمر");
        controller.edit_count("5");

        let first = controller.begin_submit().unwrap();
        let second = controller.begin_submit().unwrap();
        let (slow_result, fast_result) =
            tokio::join!(slow.generate(&first.input), fast.generate(&second.input));

        // The fast response resolves first.
        controller.complete(second.id, fast_result);
        controller.complete(first.id, slow_result);

        assert_eq!(controller.result_text(), Some(expected), "{policy:?}");
        assert_eq!(controller.state(), ControllerState::Succeeded);
        assert!(!controller.form().is_submitting);
    }
}
