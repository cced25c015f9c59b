//! Integration tests for registration, login, and the auth gate.

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{create_test_server, register_and_login};

#[tokio::test]
async fn test_register_and_login_flow() {
    let server = create_test_server();

    let response = server
        .post("/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "hunter22",
        }))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["message"],
        "User registered successfully"
    );

    let response = server
        .post("/login")
        .json(&json!({
            "email": "alice@example.com",
            "password": "hunter22",
        }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["email"], "alice@example.com");
}

#[tokio::test]
async fn test_register_missing_fields_is_400() {
    let server = create_test_server();

    let response = server
        .post("/register")
        .json(&json!({ "username": "alice" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_register_duplicate_email_is_400() {
    let server = create_test_server();
    register_and_login(&server, "alice", "alice@example.com").await;

    let response = server
        .post("/register")
        .json(&json!({
            "username": "alice2",
            "email": "alice@example.com",
            "password": "hunter22",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "conflict");
    assert_eq!(body["error"]["message"], "Username or email already exists");
}

#[tokio::test]
async fn test_login_wrong_password_is_400() {
    let server = create_test_server();
    register_and_login(&server, "alice", "alice@example.com").await;

    let response = server
        .post("/login")
        .json(&json!({
            "email": "alice@example.com",
            "password": "not-the-password",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_email_same_message_as_wrong_password() {
    let server = create_test_server();

    let response = server
        .post("/login")
        .json(&json!({
            "email": "ghost@example.com",
            "password": "whatever1",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_protected_route_without_token_is_401() {
    let server = create_test_server();

    let response = server.get("/my-urls").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "unauthorized");
    assert_eq!(body["error"]["message"], "No token");
}

#[tokio::test]
async fn test_protected_route_with_garbage_token_is_401() {
    let server = create_test_server();

    let response = server
        .get("/my-urls")
        .authorization_bearer("not-a-real-token")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["error"]["message"], "Invalid token");
}

#[tokio::test]
async fn test_token_from_one_server_rejected_by_another() {
    // Different servers get fresh states but the same test secret, so the
    // token verifies; the account simply does not exist there.
    let server_a = create_test_server();
    let server_b = create_test_server();

    let token = register_and_login(&server_a, "alice", "alice@example.com").await;

    let response = server_b.get("/me").authorization_bearer(&token).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_is_public() {
    let server = create_test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].as_str().is_some());
}
