//! Integration tests for the public redirect endpoint.

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{create_test_server, register_and_login};

#[tokio::test]
async fn test_redirect_is_302_with_location() {
    let server = create_test_server();
    let token = register_and_login(&server, "alice", "alice@example.com").await;

    let response = server
        .post("/shorten")
        .authorization_bearer(&token)
        .json(&json!({ "longUrl": "https://example.com/target" }))
        .await;
    let code = response.json::<Value>()["code"].as_str().unwrap().to_string();

    let response = server.get(&format!("/{code}")).await;
    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "https://example.com/target"
    );
}

#[tokio::test]
async fn test_redirect_needs_no_token() {
    let server = create_test_server();
    let token = register_and_login(&server, "alice", "alice@example.com").await;

    let response = server
        .post("/shorten")
        .authorization_bearer(&token)
        .json(&json!({ "longUrl": "https://example.com" }))
        .await;
    let code = response.json::<Value>()["code"].as_str().unwrap().to_string();

    // No Authorization header at all.
    let response = server.get(&format!("/{code}")).await;
    response.assert_status(StatusCode::FOUND);
}

#[tokio::test]
async fn test_unknown_code_is_404() {
    let server = create_test_server();

    let response = server.get("/zzzzzzz").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["message"], "URL not found");
}

#[tokio::test]
async fn test_malformed_code_indistinguishable_from_absent() {
    let server = create_test_server();

    let absent = server.get("/zzzzzzz").await;
    let malformed = server.get("/%24%24%24").await;

    absent.assert_status(StatusCode::NOT_FOUND);
    malformed.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        absent.json::<Value>()["error"]["message"],
        malformed.json::<Value>()["error"]["message"]
    );
}

#[tokio::test]
async fn test_deleted_code_stops_resolving_immediately() {
    let server = create_test_server();
    let token = register_and_login(&server, "alice", "alice@example.com").await;

    let response = server
        .post("/shorten")
        .authorization_bearer(&token)
        .json(&json!({ "longUrl": "https://example.com/ephemeral" }))
        .await;
    let code = response.json::<Value>()["code"].as_str().unwrap().to_string();

    server.get(&format!("/{code}")).await.assert_status(StatusCode::FOUND);

    let response = server
        .delete("/my-urls")
        .authorization_bearer(&token)
        .json(&json!({ "ids": [code] }))
        .await;
    response.assert_status_ok();

    server.get(&format!("/{code}")).await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_static_routes_shadow_code_capture() {
    let server = create_test_server();

    // "/health" matches the static route, not the /{code} capture.
    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");
}
