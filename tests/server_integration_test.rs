use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use currency_text::server::{create_router, AppState};
use currency_text::services::amount_text::AmountTextService;
use currency_text::{CurrencyTextConverter, MagnitudeCeiling};
use rust_decimal_macros::dec;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

fn create_test_app() -> Router {
    let service = AmountTextService::new(
        CurrencyTextConverter::new(MagnitudeCeiling::Trillion),
        dec!(10000),
    );

    create_router(AppState {
        service: Arc::new(service),
        request_timeout: Duration::from_secs(5),
        slow_request_threshold_ms: 1000,
    })
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/convert")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (status, json) = send(create_test_app(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["magnitude_ceiling"], "trillion");
    assert_eq!(json["max_amount"], "10000");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_post_text_amount() {
    let (status, json) = send(create_test_app(), post_json(r#"{"amount": "1,112.00"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["amount"], "1112.00");
    assert_eq!(json["text"], "ONE THOUSAND ONE HUNDRED AND TWELVE DOLLARS");
}

#[tokio::test]
async fn test_post_number_amount() {
    let (status, json) = send(create_test_app(), post_json(r#"{"amount": 9876.54}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["text"],
        "NINE THOUSAND EIGHT HUNDRED AND SEVENTY-SIX DOLLARS AND FIFTY-FOUR CENTS"
    );
}

#[tokio::test]
async fn test_get_query_amount() {
    let (status, json) = send(create_test_app(), get("/convert?amount=1.01")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["text"], "ONE DOLLAR AND ONE CENT");
}

#[tokio::test]
async fn test_application_limit_is_inclusive() {
    let (status, json) = send(create_test_app(), post_json(r#"{"amount": "10000"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["text"], "TEN THOUSAND DOLLARS");

    let (status, json) = send(create_test_app(), post_json(r#"{"amount": "10000.01"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");
    assert!(json["error"].as_str().unwrap().contains("10000"));
}

#[tokio::test]
async fn test_negative_amount_is_rejected() {
    let (status, json) = send(create_test_app(), post_json(r#"{"amount": "-0.01"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn test_invalid_amount_text() {
    let (status, json) = send(create_test_app(), post_json(r#"{"amount": "ten dollars"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid amount"));
}

#[tokio::test]
async fn test_malformed_json_is_a_client_error() {
    let (status, _) = send(create_test_app(), post_json(r#"{"amount": "#)).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_missing_query_parameter_is_a_client_error() {
    let (status, _) = send(create_test_app(), get("/convert")).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_number_amount_is_reported_with_two_places() {
    for (body, expected) in [
        (r#"{"amount": 1112.0}"#, "1112.00"),
        (r#"{"amount": 1112}"#, "1112.00"),
        (r#"{"amount": 0.1}"#, "0.10"),
    ] {
        let (status, json) = send(create_test_app(), post_json(body)).await;

        assert_eq!(status, StatusCode::OK, "{}", body);
        assert_eq!(json["amount"], expected, "{}", body);
    }
}

#[tokio::test]
async fn test_text_amount_is_reported_with_two_places() {
    let (status, json) = send(create_test_app(), post_json(r#"{"amount": "$1,012"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["amount"], "1012.00");

    let (status, json) = send(create_test_app(), get("/convert?amount=10.3")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["amount"], "10.30");
    assert_eq!(json["text"], "TEN DOLLARS AND THIRTY CENTS");
}
