//! Integration tests for the transport: headers, raw bodies, error
//! classification and request spacing

mod common;

use common::{api_path, error_envelope, setup_mock_server, test_config, TEST_SECRET};
use mudrex_rust_sdk::{ApiClient, ApiErrorKind, Config, MudrexError};
use rstest::rstest;
use serde_json::json;
use std::time::{Duration, Instant};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_every_request_is_authenticated() {
    let server = setup_mock_server().await;
    for verb in ["GET", "POST", "PATCH", "DELETE"] {
        Mock::given(method(verb))
            .and(path(api_path("/ping")))
            .and(header("X-Authentication", TEST_SECRET))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;
    }

    let api = assert_ok!(ApiClient::new(&test_config(&server)));
    assert_ok!(api.get("/ping").await);
    assert_ok!(api.post("/ping", None).await);
    assert_ok!(api.patch("/ping", None).await);
    assert_ok!(api.delete("/ping", None).await);
}

#[tokio::test]
async fn test_success_body_returned_unmodified() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(api_path("/raw")))
        .respond_with(ResponseTemplate::new(201).set_body_string("not an envelope"))
        .mount(&server)
        .await;

    let api = assert_ok!(ApiClient::new(&test_config(&server)));
    let body = assert_ok!(api.get("/raw").await);
    assert_eq!(body, b"not an envelope".to_vec());
}

#[tokio::test]
async fn test_request_body_is_sent_as_json() {
    let server = setup_mock_server().await;
    let payload = json!({ "quantity": "0.5" });
    Mock::given(method("POST"))
        .and(path(api_path("/positions/p1/close")))
        .and(body_json(payload.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let api = assert_ok!(ApiClient::new(&test_config(&server)));
    assert_ok!(api.post("/positions/p1/close", Some(&payload)).await);
}

#[rstest]
#[case(401, ApiErrorKind::Authentication)]
#[case(429, ApiErrorKind::RateLimit)]
#[case(400, ApiErrorKind::Validation)]
#[case(404, ApiErrorKind::NotFound)]
#[case(409, ApiErrorKind::Conflict)]
#[case(422, ApiErrorKind::Validation)]
#[case(500, ApiErrorKind::Server)]
#[case(502, ApiErrorKind::Server)]
#[case(503, ApiErrorKind::Server)]
#[case(504, ApiErrorKind::Server)]
#[case(501, ApiErrorKind::Server)]
#[tokio::test]
async fn test_status_classification(#[case] status: u16, #[case] expected: ApiErrorKind) {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(api_path("/fail")))
        .respond_with(
            ResponseTemplate::new(status).set_body_json(json!({ "message": "rejected" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = assert_ok!(ApiClient::new(&test_config(&server)));
    let err = api.get("/fail").await.unwrap_err();
    let api_err = err.api_error().expect("expected an API error");
    assert_eq!(api_err.kind, expected);
    assert_eq!(api_err.status, status);
    assert_eq!(api_err.code, i32::from(status));
    assert_eq!(api_err.message, "rejected");
    assert!(!err.is_transport());
}

#[rstest]
#[case(error_envelope(1002, "x"))]
#[case(json!({ "message": "order rejected: insufficient balance in futures wallet" }))]
#[tokio::test]
async fn test_insufficient_balance_on_400(#[case] body: serde_json::Value) {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path(api_path("/futures/BTCUSDT/order")))
        .respond_with(ResponseTemplate::new(400).set_body_json(body))
        .mount(&server)
        .await;

    let api = assert_ok!(ApiClient::new(&test_config(&server)));
    let err = api.post("/futures/BTCUSDT/order", None).await.unwrap_err();
    assert_eq!(err.kind(), Some(ApiErrorKind::InsufficientBalance));
}

#[tokio::test]
async fn test_envelope_error_code_is_reported() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(api_path("/assets/nope")))
        .respond_with(ResponseTemplate::new(404).set_body_json(error_envelope(3004, "asset missing")))
        .mount(&server)
        .await;

    let api = assert_ok!(ApiClient::new(&test_config(&server)));
    let err = api.get("/assets/nope").await.unwrap_err();
    match err {
        MudrexError::Api(api_err) => {
            assert_eq!(api_err.kind, ApiErrorKind::NotFound);
            assert_eq!(api_err.code, 3004);
            assert_eq!(api_err.message, "asset missing");
            assert_eq!(api_err.status, 404);
        }
        other => panic!("Expected Api error variant, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unparseable_error_body_is_preserved() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(api_path("/wallet/funds")))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let api = assert_ok!(ApiClient::new(&test_config(&server)));
    let err = api.get("/wallet/funds").await.unwrap_err();
    let api_err = err.api_error().expect("expected an API error");
    assert_eq!(api_err.kind, ApiErrorKind::Server);
    assert_eq!(api_err.message, "upstream unavailable");
    assert_eq!(api_err.status, 503);
    assert!(api_err.is_unparsed());
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let config = Config::new(TEST_SECRET)
        .unwrap()
        .with_base_url("http://127.0.0.1:1")
        .unwrap()
        .with_timeout(Duration::from_secs(2));
    let api = assert_ok!(ApiClient::new(&config));

    let err = api.get("/wallet/funds").await.unwrap_err();
    assert!(err.is_transport());
    assert!(err.api_error().is_none());
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(api_path("/slow")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_millis(800)),
        )
        .mount(&server)
        .await;

    let config = test_config(&server).with_timeout(Duration::from_millis(100));
    let api = assert_ok!(ApiClient::new(&config));

    let err = api.get("/slow").await.unwrap_err();
    assert!(err.is_transport());
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_limiter_wait_does_not_count_against_timeout() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(api_path("/ping")))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(2)
        .mount(&server)
        .await;

    let interval = Duration::from_millis(300);
    let config = test_config(&server)
        .with_rate_limit_interval(interval)
        .with_timeout(Duration::from_millis(100));
    let api = assert_ok!(ApiClient::new(&config));

    let start = Instant::now();
    assert_ok!(api.get("/ping").await);
    assert_ok!(api.get("/ping").await);
    assert!(start.elapsed() >= interval);
}

#[tokio::test]
async fn test_sequential_requests_are_spaced() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(api_path("/ping")))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(4)
        .mount(&server)
        .await;

    let interval = Duration::from_millis(100);
    let api = assert_ok!(ApiClient::new(
        &test_config(&server).with_rate_limit_interval(interval)
    ));

    let start = Instant::now();
    for _ in 0..4 {
        assert_ok!(api.get("/ping").await);
    }
    assert!(start.elapsed() >= interval * 3);
}

#[tokio::test]
async fn test_concurrent_clones_share_the_limiter() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(api_path("/ping")))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(5)
        .mount(&server)
        .await;

    let interval = Duration::from_millis(80);
    let api = assert_ok!(ApiClient::new(
        &test_config(&server).with_rate_limit_interval(interval)
    ));

    let start = Instant::now();
    let handles: Vec<_> = (0..5)
        .map(|_| {
            let api = api.clone();
            tokio::spawn(async move { api.get("/ping").await })
        })
        .collect();
    for handle in handles {
        assert_ok!(handle.await.unwrap());
    }
    assert!(start.elapsed() >= interval * 4);
}
