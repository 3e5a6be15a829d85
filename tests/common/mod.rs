//! Common test utilities for mudrex-rust-sdk tests

#![allow(dead_code)]

use mudrex_rust_sdk::{Config, MudrexClient};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::MockServer;

/// Secret every mock expects in the authentication header
pub const TEST_SECRET: &str = "test-api-secret";

/// Path prefix mirroring the production base URL
pub const BASE_PATH: &str = "/fapi/v1";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Config pointed at the mock server, with no rate limiting
pub fn test_config(server: &MockServer) -> Config {
    Config::new(TEST_SECRET)
        .expect("valid secret")
        .with_base_url(&format!("{}{}", server.uri(), BASE_PATH))
        .expect("valid mock URL")
        .with_rate_limit_interval(Duration::ZERO)
}

/// Client pointed at the mock server, with no rate limiting
pub fn test_client(server: &MockServer) -> MudrexClient {
    MudrexClient::new(test_config(server)).expect("client should build")
}

/// Full mock path for an API path
pub fn api_path(path: &str) -> String {
    format!("{}{}", BASE_PATH, path)
}

/// Successful envelope around `data`
pub fn envelope(data: Value) -> Value {
    json!({
        "data": data,
        "message": "success",
    })
}

/// Failed envelope with a structured error
pub fn error_envelope(code: i32, message: &str) -> Value {
    json!({
        "data": null,
        "message": message,
        "error": { "code": code, "message": message },
    })
}
