use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use gemini_relay::client::{RelayClient, RelayFailure};

async fn start_mock_relay(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/chat",
        post(move || async move {
            let status = StatusCode::from_u16(response_status).unwrap();
            (
                status,
                [(axum::http::header::CONTENT_TYPE, "application/json")],
                response_body,
            )
                .into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

#[tokio::test]
async fn given_relay_success_when_sending_then_returns_response_text() {
    let (base_url, shutdown_tx) = start_mock_relay(200, r#"{"response": "hi"}"#).await;

    let result = RelayClient::new(&base_url).send("hello").await;

    assert_eq!(result.unwrap(), "hi");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_relay_error_body_when_sending_then_returns_failure_with_message() {
    let (base_url, shutdown_tx) = start_mock_relay(
        500,
        r#"{"statusCode": 500, "errorMessage": "API key not configured"}"#,
    )
    .await;

    let result = RelayClient::new(format!("{}/", base_url)).send("hello").await;

    assert_eq!(
        result.unwrap_err(),
        RelayFailure::new(Some(500), "API key not configured")
    );
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_error_body_with_message_field_when_sending_then_message_is_used() {
    let (base_url, shutdown_tx) =
        start_mock_relay(400, r#"{"statusCode": 400, "message": "Prompt is required"}"#).await;

    let failure = RelayClient::new(&base_url).send(" ").await.unwrap_err();

    assert_eq!(failure.status, Some(400));
    assert_eq!(failure.message, "Prompt is required");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_503_without_body_when_sending_then_failure_is_busy() {
    let (base_url, shutdown_tx) = start_mock_relay(503, "").await;

    let failure = RelayClient::new(&base_url).send("hello").await.unwrap_err();

    assert_eq!(failure.status, Some(503));
    assert_eq!(failure.message, "Request failed with status code 503");
    assert!(failure.is_busy());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unexpected_success_body_when_sending_then_returns_failure() {
    let (base_url, shutdown_tx) = start_mock_relay(200, r#"{"answer": "hi"}"#).await;

    let failure = RelayClient::new(&base_url).send("hello").await.unwrap_err();

    assert!(failure.message.starts_with("Unexpected relay response"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_relay_when_sending_then_failure_has_no_status() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let failure = RelayClient::new(format!("http://{}", addr))
        .send("hello")
        .await
        .unwrap_err();

    assert_eq!(failure.status, None);
    assert!(!failure.is_busy());
}

#[tokio::test]
async fn given_error_body_with_both_message_fields_when_sending_then_error_message_wins() {
    let (base_url, shutdown_tx) = start_mock_relay(
        500,
        r#"{"statusCode": 500, "errorMessage": "API key not configured", "message": "Internal"}"#,
    )
    .await;

    let failure = RelayClient::new(&base_url).send("hello").await.unwrap_err();

    assert_eq!(failure.message, "API key not configured");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_relay_reports_upstream_503_when_sending_then_failure_is_busy() {
    let (base_url, shutdown_tx) = start_mock_relay(
        500,
        r#"{"statusCode": 500, "errorMessage": "Failed to get response from Gemini API: try later", "upstreamStatus": 503}"#,
    )
    .await;

    let failure = RelayClient::new(&base_url).send("hello").await.unwrap_err();

    assert_eq!(failure.status, Some(500));
    assert_eq!(failure.upstream_status, Some(503));
    assert!(failure.is_busy());
    shutdown_tx.send(()).ok();
}

#[test]
fn given_unreachable_relay_on_port_containing_503_when_checking_busy_then_not_busy() {
    let failure = RelayFailure::new(
        None,
        "error sending request for url (http://localhost:5030/chat)",
    );

    assert!(!failure.is_busy());
}

#[test]
fn given_unavailable_model_error_when_checking_busy_then_not_busy() {
    let failure = RelayFailure::new(
        Some(500),
        "Failed to get response from Gemini API: models/x is unavailable in region",
    )
    .with_upstream_status(Some(400));

    assert!(!failure.is_busy());
}

#[test]
fn given_wrapped_503_token_when_checking_busy_then_busy() {
    let failure = RelayFailure::new(
        Some(500),
        "Failed to get response from Gemini API: Request failed with status code 503",
    );

    assert!(failure.is_busy());
}

#[test]
fn given_base_url_with_trailing_slash_when_constructing_then_chat_url_is_normalized() {
    let client = RelayClient::new("http://localhost:3000/");

    assert_eq!(client.chat_url(), "http://localhost:3000/chat");
}
