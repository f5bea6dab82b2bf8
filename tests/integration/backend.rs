//! Handler tests with a substituted backend
//!
//! Uses in-process `ContentGenerator` stubs instead of an HTTP mock to check
//! what the handler forwards and that no state carries over between calls.

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::{constants::*, server_with_generator, EchoGenerator, StubGenerator};
use crate::mocks::GeminiTestData;

#[tokio::test]
async fn test_backend_receives_parsed_payload() {
    let server = server_with_generator(Some(TEST_API_KEY), std::sync::Arc::new(EchoGenerator));
    let payload = GeminiTestData::request_with_config();

    let response = server.post(FUNCTION_PATH).json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), payload);
}

#[tokio::test]
async fn test_key_order_survives_reserialization() {
    let server = server_with_generator(Some(TEST_API_KEY), std::sync::Arc::new(EchoGenerator));

    let response = server
        .post(FUNCTION_PATH)
        .text(r#"{"zeta":true,"alpha":[1,2],"mid":{"y":1,"x":2}}"#)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), r#"{"zeta":true,"alpha":[1,2],"mid":{"y":1,"x":2}}"#);
}

#[tokio::test]
async fn test_backend_not_called_on_rejected_requests() {
    let stub = StubGenerator::new(json!({ "candidates": [] }));
    let server = server_with_generator(Some(TEST_API_KEY), stub.clone());

    server.get(FUNCTION_PATH).await;
    server.put(FUNCTION_PATH).await;
    server.post(FUNCTION_PATH).text("broken {").await;

    assert_eq!(stub.calls(), 0);

    let no_key = server_with_generator(None, stub.clone());
    no_key
        .post(FUNCTION_PATH)
        .json(&GeminiTestData::simple_request())
        .await;

    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_repeated_requests_are_independent() {
    let stub = StubGenerator::new(GeminiTestData::simple_response());
    let server = server_with_generator(Some(TEST_API_KEY), stub.clone());

    let first = server
        .post(FUNCTION_PATH)
        .json(&GeminiTestData::simple_request())
        .await;
    let second = server
        .post(FUNCTION_PATH)
        .json(&GeminiTestData::simple_request())
        .await;

    assert_eq!(first.status_code(), second.status_code());
    assert_eq!(first.text(), second.text());
    assert_eq!(stub.calls(), 2);
}
