//! End-to-end tests: the real orchestration and client against the real
//! endpoint served on an ephemeral loopback port, with the rater backend
//! stubbed out.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{anyhow, Result};

use sentiscope_api::{AppState, ModelState, Sentiment, StarRater, StarRating};
use sentiscope_console::client::{self, AnalyzeOutcome, ApiClient, ClassifyError};
use sentiscope_console::i18n::Lang;
use sentiscope_console::session::Session;

struct Fixed(u8, f32);

impl StarRater for Fixed {
    fn rate(&self, _text: &str) -> Result<StarRating> {
        Ok(StarRating {
            stars: self.0,
            confidence: self.1,
        })
    }
}

struct Failing;

impl StarRater for Failing {
    fn rate(&self, _text: &str) -> Result<StarRating> {
        Err(anyhow!("inference backend exploded"))
    }
}

/// Serves the endpoint on an ephemeral port and returns a client for it.
async fn spawn_endpoint(model: ModelState) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(sentiscope_api::serve(listener, AppState::new(model)));
    ApiClient::new(format!("http://{addr}")).unwrap()
}

/// A client whose address has nothing listening on it.
async fn unreachable_client() -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    ApiClient::new(format!("http://{addr}")).unwrap()
}

#[tokio::test]
async fn test_positive_analysis_end_to_end() {
    let client = spawn_endpoint(ModelState::Ready(Box::new(Fixed(5, 0.91)))).await;
    let mut session = Session::new(Lang::En);

    let outcome = client::analyze(&client, &mut session, "I love this, it's amazing!").await;
    let classification = match outcome {
        AnalyzeOutcome::Classified(c) => c,
        other => panic!("expected a classification, got {other:?}"),
    };

    assert_eq!(classification.label, Sentiment::Positive);
    assert!((classification.score - 0.91).abs() < 1e-6);
    assert_eq!(session.history.len(), 1);
    assert_eq!(session.history[0].word_count, 5);
    assert_eq!(session.current_text, "I love this, it's amazing!");
}

#[tokio::test]
async fn test_negative_analysis_end_to_end() {
    let client = spawn_endpoint(ModelState::Ready(Box::new(Fixed(1, 0.87)))).await;
    let mut session = Session::new(Lang::En);

    let outcome = client::analyze(&client, &mut session, "It's horrible and disappointing.").await;
    match outcome {
        AnalyzeOutcome::Classified(c) => {
            assert_eq!(c.label, Sentiment::Negative);
            assert!((c.score - 0.87).abs() < 1e-6);
        }
        other => panic!("expected a classification, got {other:?}"),
    }
    assert_eq!(session.history.len(), 1);
}

#[tokio::test]
async fn test_empty_input_issues_no_request() {
    // The client points at a dead address: if the guard let a request
    // through, the outcome would be a connection failure, not EmptyInput.
    let client = unreachable_client().await;
    let mut session = Session::new(Lang::En);

    for input in ["", "   ", "\t\n"] {
        let outcome = client::analyze(&client, &mut session, input).await;
        assert!(matches!(outcome, AnalyzeOutcome::EmptyInput), "input {input:?}");
    }
    assert!(session.history.is_empty());
}

#[tokio::test]
async fn test_degraded_endpoint_serves_fallback_over_http() {
    let client = spawn_endpoint(ModelState::Unavailable).await;

    let classification = client.classify("anything").await.unwrap();
    assert_eq!(classification.label, Sentiment::Positive);
    assert_eq!(classification.score, 0.0);

    let health = client.health().await.unwrap();
    assert!(health.is_degraded());
}

#[tokio::test]
async fn test_unreachable_endpoint_reports_connection_failure() {
    let client = unreachable_client().await;
    let mut session = Session::new(Lang::En);

    let outcome = client::analyze(&client, &mut session, "still works?").await;
    match outcome {
        AnalyzeOutcome::Failed(ClassifyError::Connection(_)) => {}
        other => panic!("expected a connection failure, got {other:?}"),
    }

    // A failed call never touches the history.
    assert!(session.history.is_empty());
}

#[tokio::test]
async fn test_slow_endpoint_reports_timeout_distinctly() {
    // Accepts connections but never answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    tokio::spawn(async move {
                        let _hold = socket;
                        tokio::time::sleep(Duration::from_secs(60)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    let client =
        ApiClient::with_timeout(format!("http://{addr}"), Duration::from_millis(200)).unwrap();
    let err = client.classify("hello").await.unwrap_err();
    assert!(matches!(err, ClassifyError::Timeout), "got {err:?}");
}

#[tokio::test]
async fn test_server_error_leaves_history_unchanged() {
    let client = spawn_endpoint(ModelState::Ready(Box::new(Failing))).await;
    let mut session = Session::new(Lang::En);

    let outcome = client::analyze(&client, &mut session, "boom").await;
    match outcome {
        AnalyzeOutcome::Failed(ClassifyError::Status(500)) => {}
        other => panic!("expected a 500, got {other:?}"),
    }
    assert!(session.history.is_empty());
}

#[tokio::test]
async fn test_history_grows_only_on_success() {
    let good = spawn_endpoint(ModelState::Ready(Box::new(Fixed(4, 0.7)))).await;
    let dead = unreachable_client().await;
    let mut session = Session::new(Lang::En);

    client::analyze(&good, &mut session, "one").await;
    client::analyze(&dead, &mut session, "two").await;
    client::analyze(&good, &mut session, "three").await;

    let texts: Vec<&str> = session.history.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, ["one", "three"]);
}

#[tokio::test]
async fn test_wait_ready_resolves_once_serving() {
    let client = spawn_endpoint(ModelState::Ready(Box::new(Fixed(4, 0.6)))).await;
    let health = client.wait_ready(Duration::from_secs(5)).await;
    assert!(health.is_some_and(|h| h.status == "ok" && !h.is_degraded()));
}
